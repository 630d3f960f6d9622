use std::{
    io::ErrorKind,
    net::{SocketAddr, UdpSocket},
};

use anyhow::{Context, Result};
use log::info;

/// Large enough for 21 landmarks with generous decimals
const RECEIVE_BUFFER_SIZE: usize = 4096;

/// Non-blocking listener for landmark datagrams
pub struct LandmarkReceiver {
    socket: UdpSocket,
    buffer: Vec<u8>,
}

impl LandmarkReceiver {
    pub fn bind(address: SocketAddr) -> Result<Self> {
        let socket = UdpSocket::bind(address)
            .with_context(|| format!("failed to bind UDP socket on {}", address))?;
        socket.set_nonblocking(true)?;
        info!("Listening for landmark packets on {}", socket.local_addr()?);
        Ok(LandmarkReceiver {
            socket,
            buffer: vec![0u8; RECEIVE_BUFFER_SIZE],
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.socket.local_addr()?)
    }

    /// Next pending datagram, if any; never blocks
    pub fn check_messages(&mut self) -> Result<Option<&[u8]>> {
        match self.socket.recv_from(&mut self.buffer) {
            Ok((len, _addr)) => Ok(Some(&self.buffer[..len])),
            Err(ref e) if e.kind() == ErrorKind::WouldBlock => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
