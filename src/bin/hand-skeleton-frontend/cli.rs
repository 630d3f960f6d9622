use std::net::{IpAddr, Ipv4Addr};

use clap::{command, Parser};

const CONFIG_FILE_PATH: &str = "./handSkeleton.json";
const UDP_HOST: std::net::IpAddr = IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1));
const UDP_PORT: u16 = 5052;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Where to load Hand Skeleton config
    #[arg(long="configPath",default_value_t=String::from(CONFIG_FILE_PATH))]
    pub config_path: String,

    /// Address to listen on for landmark packets; the backend cannot share
    /// this port, so run one or the other against a single tracker
    #[arg(long = "udp.host", default_value_t=UDP_HOST)]
    pub udp_host: std::net::IpAddr,

    #[arg(long = "udp.port", default_value_t=UDP_PORT)]
    pub udp_port: u16,

    #[arg(long = "loglevel",default_value_t=String::from("info"))]
    pub log_level: String,
}
