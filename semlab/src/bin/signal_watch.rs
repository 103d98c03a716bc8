// ============================================================================
// signal_watch.rs - Señales asincrónicas con sueño interrumpible
// ============================================================================
//
// Ciclo Idle -> Handler-activo -> Idle, con salida inmediata ante SIGINT.
// El handler real solo marca banderas atómicas; todo lo que se imprime
// aquí lo imprime el hilo principal al drenarlas.
//
// Para probarlo desde otra terminal:
//     $ kill -HUP  <pid>
//     $ kill -USR1 <pid>
//     $ kill -INT  <pid>     (o ctrl-c para terminar)

use std::process;

use mysignals::ffi;
use mysignals::{SignalKind, SignalRuntime};
use semlab::sl_log;

// duracion del sueño idle y de la ventana de observacion
const WINDOW_SECS: u32 = 3;

fn main() {
    println!("╔════════════════════════════════════════════════════════════╗");
    println!("║        SemLab: vigía de señales con sigsuspend             ║");
    println!("╚════════════════════════════════════════════════════════════╝\n");

    // el pid se imprime para poder enviarle señales desde otra shell
    sl_log!("Mi pid es: {}", ffi::process_id());
    sl_log!("Desde otra terminal: kill -HUP {0} | kill -USR1 {0} | kill -INT {0}\n",
        ffi::process_id());

    let rt = SignalRuntime::new();
    let report = rt.install();
    if !report.failed.is_empty() {
        // modo degradado: esas clases no se atenderan
        sl_log!("⚠️  Arrancando sin atender: {:?}", report.failed);
    }

    loop {
        // la peticion de terminar gana siempre y no imprime nada mas
        if rt.take(SignalKind::Terminate) {
            process::exit(0);
        }

        if let Some(kind) = rt.take_informative() {
            handler_active(&rt, kind);
            continue;
        }

        if let Some(raw) = rt.take_unexpected() {
            eprintln!("Llegó una señal fuera del conjunto: {}", raw);
            continue;
        }

        sl_log!("💤 Durmiendo ~{} segundos", WINDOW_SECS);
        rt.interruptible_sleep(WINDOW_SECS);
    }
}

// fase handler-activo: todo bloqueado, ~3 segundos de ventana y reporte
// de lo que quedo pendiente de entrega mientras tanto
fn handler_active(rt: &SignalRuntime, kind: SignalKind) {
    sl_log!("📶 Atrapada {}, procesando por ~{} segundos", kind.name(), WINDOW_SECS);
    sl_log!("   Envía otra HUP / USR1 / INT (o varias) mientras tanto");

    match rt.observation_window(WINDOW_SECS) {
        Ok(report) => {
            if report.hangup_waiting {
                sl_log!("   Hay una SIGHUP en espera");
            }
            if report.user1_waiting {
                sl_log!("   Hay una SIGUSR1 en espera");
            }
        }
        Err(err) => {
            eprintln!("Error: falló la ventana de observación: {}", err);
        }
    }

    sl_log!("✅ Listo con {}\n", kind.name());
}
