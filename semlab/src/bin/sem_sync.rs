// ============================================================================
// sem_sync.rs - Handoff de sincronización con semáforo en cero
// ============================================================================
//
// El trabajador se bloquea sobre un semáforo que arranca en cero. Cada post
// del lado que controla lo deja avanzar exactamente una vez: al decrementar,
// el conteo vuelve a cero y el ciclo del trabajador se bloquea de nuevo.
// Es un canal de eventos por flanco, no un mutex.

use std::thread;
use std::time::Duration;

use mysems::api_rust::*;
use semlab::console::pause;
use semlab::sl_log;

fn main() {
    println!("╔════════════════════════════════════════════════════════════╗");
    println!("║        SemLab: handoff con semáforo inicial en cero        ║");
    println!("╚════════════════════════════════════════════════════════════╝\n");

    // conteo inicial 0: no disponible, es para sincronizar y no para excluir
    let sem = match my_sem_init(0) {
        Ok(sem) => sem,
        Err(err) => {
            eprintln!("Error: no se pudo inicializar el semáforo: {}", err);
            return;
        }
    };

    let worker_sem = sem.clone();
    // el trabajador vive hasta que el proceso termine, no se hace join
    let _worker = thread::spawn(move || loop {
        my_sem_wait(&worker_sem);
        sl_log!("🧵 Evento recibido, ¡el hilo trabajador avanza una vez!");
        thread::sleep(Duration::from_secs(1));
    });

    sl_log!("Hilo trabajador arrancado, bloqueado esperando el evento.");
    sl_log!("El post es una sola llamada sin bloqueo ni alocación: un productor");
    sl_log!("con contexto restringido (estilo ISR) puede dispararlo sin más.");
    pause("Presiona enter para hacer el post.");

    my_sem_post(&sem);
    sl_log!("📨 Evento publicado. El trabajador despierta una única vez.");

    pause("Presiona enter para cerrar el demo.");
}
