//! runtime de señales del proceso
//! instala handlers, mantiene bloqueadas las clases vigiladas fuera de
//! sigsuspend y ofrece el sueño interrumpible y la ventana de observacion

use std::io;

use libc::c_int;
use once_cell::sync::OnceCell;

use crate::events::SignalKind;
use crate::ffi::{self, SigSet};
use crate::flags::{SignalFlags, FLAGS};

/// que quedo instalado y que fallo durante el arranque
#[derive(Debug)]
pub struct InstallReport {
    /// clases que quedaron con handler
    pub installed: Vec<SignalKind>,
    /// clases cuyo sigaction fallo, no deberia pasar
    pub failed: Vec<SignalKind>,
    /// el intento sobre SIGKILL fallo, eso si deberia pasar siempre
    pub kill_rejected: bool,
}

/// que llego mientras la ventana de observacion tuvo todo bloqueado
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowReport {
    pub hangup_waiting: bool,
    pub user1_waiting: bool,
}

static INSTALL: OnceCell<InstallReport> = OnceCell::new();

// handler compartido: dos stores atomicos y nada mas
// printf y compañia no son seguras aqui, el hilo principal reporta despues
extern "C" fn on_signal(sig: c_int) {
    match SignalKind::from_raw(sig) {
        Some(kind) => FLAGS.post(kind),
        None => FLAGS.post_unexpected(sig),
    }
}

// interruptor del sueño: marca la bandera y retorna, su unico proposito
// es que el sigsuspend de abajo vuelva
extern "C" fn on_alarm(sig: c_int) {
    if let Some(kind) = SignalKind::from_raw(sig) {
        FLAGS.post(kind);
    }
}

/// Contexto de señales del proceso.
///
/// Las tres clases vigiladas se mantienen bloqueadas en el hilo que llama
/// salvo dentro de sigsuspend. Así la revisión de banderas y la suspensión
/// forman un par sin carreras: una señal que llegue entre ambas queda
/// pendiente y despierta al sigsuspend apenas empiece.
pub struct SignalRuntime {
    flags: &'static SignalFlags,
}

impl SignalRuntime {
    pub const WATCHED: [SignalKind; 3] = [
        SignalKind::Hangup,
        SignalKind::User1,
        SignalKind::Terminate,
    ];

    pub fn new() -> Self {
        Self { flags: &FLAGS }
    }

    /// Instala los handlers y bloquea las clases vigiladas en este hilo.
    ///
    /// Los fallos de instalación se reportan a stderr y la ejecución sigue
    /// en modo degradado: esa clase simplemente no se atenderá. El intento
    /// sobre SIGKILL falla siempre y solo se deja constancia.
    pub fn install(&self) -> &'static InstallReport {
        let report = INSTALL.get_or_init(|| {
            let mut installed = Vec::new();
            let mut failed = Vec::new();

            for kind in Self::WATCHED {
                match ffi::install_handler(kind, on_signal, false) {
                    Ok(()) => installed.push(kind),
                    Err(err) => {
                        // no deberia pasar
                        eprintln!("Error: no se puede manejar {}: {}", kind.name(), err);
                        failed.push(kind);
                    }
                }
            }

            // SIGKILL no se puede interceptar nunca, el fallo es el esperado
            let kill_rejected =
                match ffi::install_handler_raw(libc::SIGKILL, on_signal, false) {
                    Err(err) => {
                        eprintln!("No se puede manejar SIGKILL: {} (esperado)", err);
                        true
                    }
                    Ok(()) => false,
                };

            InstallReport {
                installed,
                failed,
                kill_rejected,
            }
        });

        // el bloqueo es por hilo, se aplica en cada llamada y no solo en la
        // primera para que cualquier hilo que conduzca el ciclo quede cubierto
        let mut watched = SigSet::empty();
        for kind in Self::WATCHED {
            watched.add(kind);
        }
        if let Err(err) = ffi::block(&watched) {
            eprintln!("Error: no se pudo bloquear las señales vigiladas: {}", err);
        }

        report
    }

    /// Duerme ~secs segundos o hasta que llegue una clase vigilada.
    ///
    /// La receta: handler de alarma de un solo uso que no hace nada útil,
    /// máscara actual menos la alarma y menos las vigiladas, armar el
    /// temporizador y suspender. sigsuspend cambia la máscara y bloquea en
    /// un solo paso, así que no existe la ventana donde una señal posterior
    /// al cálculo de la máscara se pierda.
    pub fn interruptible_sleep(&self, secs: u32) {
        self.sleep_with_mask(secs, true);
    }

    fn sleep_with_mask(&self, secs: u32, deliver_watched: bool) {
        // bandera de alarma vieja fuera, solo interesa la de este sueño
        self.flags.take(SignalKind::Alarm);

        if let Err(err) = ffi::install_handler(SignalKind::Alarm, on_alarm, true) {
            // sin interruptor no hay forma segura de despertar, no suspender
            eprintln!("Error: no se puede manejar SIGALRM: {}", err);
            return;
        }

        let mut mask = match SigSet::current() {
            Ok(mask) => mask,
            Err(err) => {
                eprintln!("Error: no se pudo leer la mascara del hilo: {}", err);
                return;
            }
        };
        mask.remove(SignalKind::Alarm);
        if deliver_watched {
            for kind in Self::WATCHED {
                mask.remove(kind);
            }
        }

        // alarm reemplaza cualquier temporizador anterior
        ffi::arm_alarm(secs);
        ffi::suspend(&mask);

        self.flags.take(SignalKind::Alarm);
    }

    /// Ventana de observación de la fase handler-activo.
    ///
    /// Bloquea todo, deja pasar ~secs segundos (solo la alarma puede
    /// entrar), consulta qué clases informativas quedaron pendientes de
    /// entrega y restaura la máscara anterior. Varios envíos de la misma
    /// clase mientras todo estuvo bloqueado colapsan en una sola pendiente:
    /// las señales estándar no se encolan.
    pub fn observation_window(&self, secs: u32) -> io::Result<WindowReport> {
        let old = ffi::block_all()?;

        self.sleep_with_mask(secs, false);

        // la mascara se restaura aunque la consulta falle, lo pendiente se
        // entregara en el proximo sigsuspend
        let pending = ffi::pending();
        let restored = ffi::set_mask(&old);
        let pending = pending?;
        restored?;

        Ok(WindowReport {
            hangup_waiting: pending.contains(SignalKind::Hangup),
            user1_waiting: pending.contains(SignalKind::User1),
        })
    }

    /// consume la bandera de una clase
    pub fn take(&self, kind: SignalKind) -> bool {
        self.flags.take(kind)
    }

    /// consume la primera informativa marcada
    pub fn take_informative(&self) -> Option<SignalKind> {
        self.flags.take_informative()
    }

    /// consume el numero crudo de una señal fuera del conjunto
    pub fn take_unexpected(&self) -> Option<i32> {
        self.flags.take_unexpected()
    }
}

impl Default for SignalRuntime {
    fn default() -> Self {
        Self::new()
    }
}
