//! Network-flavoured demo commands: `scanip` and `ping`.

use std::net::Ipv4Addr;

use async_trait::async_trait;
use zeroloop_net::{GeoClient, IpInfo};
use zeroloop_types::config::ShellConfig;
use zeroloop_types::error::Result;
use zeroloop_types::output::{Console, LineStyle};

use crate::interpreter::{Command, CommandRegistry};

/// Register the network commands into a registry.
pub fn register_network_commands(reg: &mut CommandRegistry, config: &ShellConfig) {
    reg.register(Box::new(ScanIpCmd {
        client: GeoClient::new(&config.geo_endpoint),
    }));
    reg.register(Box::new(PingCmd {
        count: config.ping_count,
        min_ms: config.ping_min_ms,
        max_ms: config.ping_max_ms,
        payload_bytes: config.ping_payload_bytes,
    }));
}

// ---------------------------------------------------------------------------
// scanip
// ---------------------------------------------------------------------------

struct ScanIpCmd {
    client: GeoClient,
}

#[async_trait]
impl Command for ScanIpCmd {
    fn name(&self) -> &str {
        "scanip"
    }
    fn description(&self) -> &str {
        "Get detailed information about an IP address"
    }
    fn usage(&self) -> &str {
        "scanip <ip_address>"
    }
    async fn execute(&self, args: &str, console: &Console) -> Result<()> {
        let ip = args.trim();
        if ip.is_empty() {
            console.error("Error: IP address is required. Usage: scanip <ip_address>");
            return Ok(());
        }
        if ip.parse::<Ipv4Addr>().is_err() {
            console.error("Error: Invalid IP address format");
            return Ok(());
        }

        console.info(&format!("Scanning IP: {ip}..."));
        match self.client.lookup(ip).await {
            Ok(info) if info.error => {
                let reason = info.reason.as_deref().unwrap_or("Invalid IP address");
                console.error(&format!("Error: {reason}"));
            },
            Ok(info) => {
                console.line(&render_ip_info(&info), LineStyle::IpInfo);
            },
            Err(e) => {
                // Generic message; the transport detail goes to the log.
                log::warn!("scanip lookup failed: {e}");
                console.error("Error fetching IP information. Please try again.");
            },
        }
        Ok(())
    }
}

fn render_ip_info(info: &IpInfo) -> String {
    let text = |v: &Option<String>| v.clone().unwrap_or_else(|| "unknown".to_string());
    let coord = |v: &Option<f64>| {
        v.map(|c| c.to_string())
            .unwrap_or_else(|| "unknown".to_string())
    };
    format!(
        "IP Information:\n\
         IP Address: {}\n\
         Location: {}, {}, {}\n\
         Coordinates: {}, {}\n\
         ISP: {}\n\
         Timezone: {}\n\
         Currency: {} ({})",
        info.ip,
        text(&info.city),
        text(&info.region),
        text(&info.country_name),
        coord(&info.latitude),
        coord(&info.longitude),
        text(&info.org),
        text(&info.timezone),
        text(&info.currency_name),
        text(&info.currency),
    )
}

// ---------------------------------------------------------------------------
// ping
// ---------------------------------------------------------------------------

struct PingCmd {
    count: u32,
    min_ms: u64,
    max_ms: u64,
    payload_bytes: u32,
}

#[async_trait]
impl Command for PingCmd {
    fn name(&self) -> &str {
        "ping"
    }
    fn description(&self) -> &str {
        "Ping a host or IP address"
    }
    fn usage(&self) -> &str {
        "ping <host/ip>"
    }
    async fn execute(&self, args: &str, console: &Console) -> Result<()> {
        let host = args.trim();
        if host.is_empty() {
            console.error("Error: Host/IP is required. Usage: ping <host/ip>");
            return Ok(());
        }

        console.info(&format!("Pinging {host}..."));

        let resolved = zeroloop_net::resolve_host(host);
        console.line(
            &format!(
                "Pinging {host} [{resolved}] with {} bytes of data:",
                self.payload_bytes
            ),
            LineStyle::Ping,
        );

        // Each reply waits out its own round-trip time, so output
        // interleaves with real elapsed time instead of arriving as one
        // buffered block.
        let mut times: Vec<u128> = Vec::with_capacity(self.count as usize);
        for _ in 0..self.count {
            let rtt = zeroloop_net::sample_rtt(self.min_ms, self.max_ms);
            tokio::time::sleep(rtt).await;
            let ms = rtt.as_millis();
            times.push(ms);
            console.line(
                &format!("Reply from {resolved}: time={ms}ms"),
                LineStyle::PingReply,
            );
        }

        let min = times.iter().min().copied().unwrap_or(0);
        let max = times.iter().max().copied().unwrap_or(0);
        let avg = times.iter().sum::<u128>() / times.len().max(1) as u128;

        console.line(
            &format!(
                "\nPing statistics for {resolved}:\n    \
                 Packets: Sent = {count}, Received = {count}, Lost = 0 (0% loss),\n\
                 Approximate round trip times in milli-seconds:\n    \
                 Minimum = {min}ms, Maximum = {max}ms, Average = {avg}ms",
                count = self.count,
            ),
            LineStyle::PingStats,
        );
        Ok(())
    }
}
