use std::time::Duration;

use penpoll::{DeviceSession, PenEventKind, SessionConfig};

fn main() {
    env_logger::init();

    let path = match std::env::args().nth(1) {
        Some(p) => p,
        None => {
            eprintln!("usage: poll /dev/input/eventN");
            std::process::exit(2);
        }
    };

    let mut session = DeviceSession::new(SessionConfig::default());
    if let Err(e) = session.start(&path) {
        eprintln!("{e}");
        std::process::exit(1);
    }
    println!("polling {path} (ctrl-c to quit)");

    loop {
        match session.poll() {
            Ok(events) => {
                for ev in events {
                    match ev.kind {
                        PenEventKind::TipTransition => {
                            println!("{}", if ev.tip_is_down { "tip" } else { "tip up" });
                        }
                        PenEventKind::AxisSample => {
                            println!("{:.4} {:.4}", ev.x, ev.y);
                        }
                    }
                }
            }
            Err(e) => {
                eprintln!("{e}");
                break;
            }
        }

        // Keep CPU usage sane
        std::thread::sleep(Duration::from_millis(5));
    }
}
