use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::thread;

use grip_core::config;
use grip_core::{Engine, GripResult, Mode, ModifierObserver, ModifierSet};

use crate::desktop::MacDesktop;
use crate::event_tap::EventTap;
use crate::ipc::SocketServer;
use crate::permission;

use super::daemon_commands;
use super::daemon_ipc;
use super::daemon_types::DaemonMsg;

/// The inner daemon loop, separated so cleanup always runs in `run()`.
pub(super) fn daemon_loop() -> GripResult<()> {
    let config = config::load();
    grip_core::log::init(&config.logging);

    grip_core::log_info!("Daemon started (PID: {})", std::process::id());
    grip_core::log_info!(
        "Config: drag={}, resize={}, log_level={}",
        ModifierSet::from_modifiers(&config.gestures.drag),
        ModifierSet::from_modifiers(&config.gestures.resize),
        config.logging.level
    );

    if permission::is_trusted(true) {
        grip_core::log_info!("Accessibility access granted");
    } else {
        grip_core::log_warn!("Accessibility access not granted; windows cannot be moved");
        eprintln!(
            "Grip needs accessibility access. Enable it in System Settings > \
             Privacy & Security > Accessibility."
        );
    }

    let (tx, rx) = mpsc::channel::<DaemonMsg>();

    // At most one queued mouse tick; the engine re-samples the pointer
    // anyway.
    let tick_pending = Arc::new(AtomicBool::new(false));

    let tap = {
        let tx = tx.clone();
        let tick_pending = tick_pending.clone();
        EventTap::start(move |_| {
            if !tick_pending.swap(true, Ordering::AcqRel) {
                let _ = tx.send(DaemonMsg::MouseMoved);
            }
        })?
    };

    let mut engine = Engine::new(MacDesktop::new(tap.mouse_gate())?);

    let observer = {
        let tx = tx.clone();
        ModifierObserver::start_observing(&tap, config.gestures.clone(), move |mode| {
            let _ = tx.send(DaemonMsg::Mode(mode));
        })
    };

    let server = SocketServer::bind()?;
    let ipc_thread = {
        let tx = tx.clone();
        thread::spawn(move || daemon_ipc::ipc_loop(server, tx))
    };

    // Blocks until a message arrives.
    while let Ok(msg) = rx.recv() {
        match msg {
            DaemonMsg::Mode(mode) => {
                engine.set_mode(mode);
            }
            DaemonMsg::MouseMoved => {
                tick_pending.store(false, Ordering::Release);
                engine.on_mouse_moved();
            }
            DaemonMsg::Command(command, reply_tx) => {
                let (response, stop) = daemon_commands::handle_command(&command, engine.mode());
                let _ = reply_tx.send(response);
                if stop {
                    break;
                }
            }
        }
    }

    grip_core::log_info!("Daemon shutting down");
    drop(observer);
    engine.set_mode(Mode::None);
    tap.stop();
    drop(tx);
    let _ = ipc_thread.join();

    Ok(())
}
