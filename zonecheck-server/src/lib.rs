//! Restricted zone check service.
//!
//! Serves a single JSON endpoint, `POST /api/check-zone`, which takes a
//! coordinate plus the city and state it lies in, looks up the candidate
//! zones for that city or state and runs them through
//! [`zonecheck_core::evaluate`].
//!
//! The server is split into:
//!
//! - [`api`]: request validation and response shapes
//! - [`store`]: where candidate zones come from
//! - [`web`]: axum routing and the webserver subsystem
//! - [`error`]: request errors and their HTTP mapping

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};

pub mod api;
pub mod error;
pub mod store;
pub mod web;

#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub verbose: Verbosity<InfoLevel>,

    /// Port for the webserver
    #[arg(short, long, default_value_t = 3000)]
    pub port: u16,

    /// Address to bind the webserver to
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub address: IpAddr,

    /// JSON file with the restricted zone table
    #[arg(short, long)]
    pub zones: PathBuf,
}

impl Cli {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.address, self.port)
    }
}
