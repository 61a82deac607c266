#![allow(dead_code)]

#[path = "../../src/battery.rs"]
mod battery;
#[path = "../../src/behaviour.rs"]
mod behaviour;
#[path = "../../src/channels.rs"]
mod channels;
#[path = "../../src/constants.rs"]
mod constants;
#[path = "../../src/debounce.rs"]
mod debounce;
#[path = "../../src/espota.rs"]
mod espota;
#[path = "../../src/mdns.rs"]
mod mdns;
#[path = "../../src/mqtt.rs"]
mod mqtt;
#[path = "../../src/pins.rs"]
mod pins;
#[path = "../../src/routine.rs"]
mod routine;
#[path = "../../src/topics.rs"]
mod topics;
