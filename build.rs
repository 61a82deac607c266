use std::{env, error::Error, fs, path::Path};

use serde::Deserialize;

#[derive(Deserialize)]
struct RawConfig {
    wifi_ssid: String,
    wifi_psk: String,
    hostname: String,
    mqtt_hostname: String,
    mqtt_port: Option<u16>,
    mqtt_username: String,
    mqtt_password: String,
    ota_hostname: Option<String>,
    ota_port: Option<u16>,
    ota_password: Option<String>,
    tls_ca: Option<String>,
    tls_cert: Option<String>,
    tls_key: Option<String>,
    idle_sleep_seconds: Option<u32>,
    battery_interval_seconds: Option<u16>,
}

// mbedtls wants PEM material as a NUL terminated buffer
fn pem(value: Option<String>) -> Option<String> {
    value.map(|v| format!("{}\0", v.trim_matches('\n')))
}

fn main() -> Result<(), Box<dyn Error>> {
    // Tell Cargo to rerun if toml changes
    println!("cargo:rerun-if-changed=cfg.toml");

    // Read and parse
    let toml_str = fs::read_to_string("cfg.toml")?;
    let raw: RawConfig = toml::from_str(&toml_str)?;

    if raw.hostname.len() > 32 {
        return Err("hostname must not exceed 32 characters".into());
    }

    let ota_hostname = raw.ota_hostname.unwrap_or_else(|| raw.hostname.clone());

    // Generate Rust code
    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("config.rs");
    let code = format!(
        r#"
        pub const CONFIG: Config = Config {{
            wifi_ssid: {ssid:?},
            wifi_psk: {psk:?},
            hostname: {host:?},
            mqtt_hostname: {mh:?},
            mqtt_port: {mp},
            mqtt_username: {mu:?},
            mqtt_password: {mpw:?},
            ota_hostname: {oh:?},
            ota_port: {op},
            ota_password: {opw:?},
            tls_ca: {ca:?},
            tls_cert: {cert:?},
            tls_key: {key:?},
            idle_sleep_seconds: {sleep},
            battery_interval_seconds: {batt},
        }};
    "#,
        ssid = raw.wifi_ssid,
        psk = raw.wifi_psk,
        host = raw.hostname,
        mh = raw.mqtt_hostname,
        mp = raw.mqtt_port.unwrap_or(1883),
        mu = raw.mqtt_username,
        mpw = raw.mqtt_password,
        oh = ota_hostname,
        op = raw.ota_port.unwrap_or(3232),
        opw = raw.ota_password.unwrap_or_default(),
        ca = pem(raw.tls_ca),
        cert = pem(raw.tls_cert),
        key = pem(raw.tls_key),
        sleep = raw.idle_sleep_seconds.unwrap_or(300),
        batt = raw.battery_interval_seconds.unwrap_or(60),
    );

    fs::write(dest_path, code)?;
    Ok(())
}
