// ============================================================================
// sem_mutex.rs - Exclusión mutua con un semáforo binario
// ============================================================================
//
// Un hilo trabajador toma y suelta el semáforo en un ciclo con un segundo
// de descanso; el hilo principal lo toma y lo suelta de forma interactiva.
// Mientras el principal lo tenga tomado, el trabajador queda bloqueado.

use std::thread;
use std::time::Duration;

use mysems::api_rust::*;
use semlab::console::pause;
use semlab::sl_log;

fn main() {
    println!("╔════════════════════════════════════════════════════════════╗");
    println!("║        SemLab: semáforo binario como mutex                 ║");
    println!("╚════════════════════════════════════════════════════════════╝\n");

    // conteo inicial 1: la seccion critica arranca libre
    let sem = match my_sem_init(1) {
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
        sl_log!("🧵 ¡Hola desde el hilo trabajador!");
        my_sem_post(&worker_sem);
        thread::sleep(Duration::from_secs(1));
    });

    sl_log!("Hilo trabajador arrancado, el semáforo está libre.");
    pause("Presiona enter para tomar el semáforo.");

    my_sem_wait(&sem);
    sl_log!("🔒 Semáforo tomado. El trabajador queda bloqueado en su próximo ciclo.");

    // aqui iria el trabajo sobre lo que comparten los hilos
    pause("Presiona enter para soltarlo.");

    sl_log!("🔓 Semáforo liberado.");
    my_sem_post(&sem);

    pause("Presiona enter para cerrar el demo.");
}
