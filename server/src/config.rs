//! Command-line and environment configuration.

use std::net::{IpAddr, SocketAddr};

use clap::Parser;
use todo_core::IdPolicy;

#[derive(Debug, Clone, Parser)]
#[command(name = "todo-server")]
#[command(about = "In-memory todo list served over HTTP")]
pub struct Config {
    /// Address to bind the server to
    #[arg(long, env = "TODO_BIND", default_value = "0.0.0.0")]
    pub bind: IpAddr,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// How new todo ids are assigned: `len-plus-one` or `max-plus-one`
    #[arg(long, env = "TODO_ID_POLICY", default_value_t = IdPolicy::LenPlusOne)]
    pub id_policy: IdPolicy,
}

impl Config {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}
