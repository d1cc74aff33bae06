// src/core/net.rs

// HTTP/1.0 GET over TCP (std-only). Endpoints that insist on TLS or
// redirects register as a failed source and the loader falls through.

use std::{io::{Read, Write}, net::TcpStream, time::Duration};
use crate::config::consts::FETCH_TIMEOUT_SECS;

pub fn http_get(host: &str, path: &str) -> Result<String, Box<dyn std::error::Error>> {
    let timeout = Duration::from_secs(FETCH_TIMEOUT_SECS);
    let mut s = TcpStream::connect((host, 80))?;
    s.set_read_timeout(Some(timeout))?;
    s.set_write_timeout(Some(timeout))?;

    let req = format!(
        "GET {} HTTP/1.0\r\nHost: {}\r\nUser-Agent: clubdir/0.3\r\nConnection: close\r\n\r\n",
        path, host
    );
    s.write_all(req.as_bytes())?;
    s.flush()?;

    let mut buf = Vec::new();
    s.read_to_end(&mut buf)?;
    let resp = String::from_utf8_lossy(&buf);

    let status = resp.split("\r\n").next().unwrap_or("");
    if !status.contains("200") {
        return Err(format!("HTTP error: {} {}{}", status, host, path).into());
    }
    let body_idx = resp.find("\r\n\r\n").ok_or("Malformed HTTP response")? + 4;
    Ok(resp[body_idx..].to_string())
}
