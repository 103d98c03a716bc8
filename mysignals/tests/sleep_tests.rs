// test sin harness: el hilo principal controla exactamente que hilos
// existen y a quien se entrega cada señal

use mysignals::ffi::{self, SigSet};
use mysignals::{SignalKind, SignalRuntime};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

fn main() {
    let rt = SignalRuntime::new();
    rt.install();

    println!("\n=== TEST: el sueño interrumpible de verdad duerme ===");
    let t0 = Instant::now();
    rt.interruptible_sleep(1);
    let elapsed = t0.elapsed();
    assert!(
        elapsed >= Duration::from_millis(900),
        "El sueño retornó demasiado pronto: {:?}",
        elapsed
    );
    assert!(
        elapsed < Duration::from_secs(3),
        "La alarma nunca interrumpió el sueño: {:?}",
        elapsed
    );
    println!("  [Main] Durmió {:?} con alarma de 1 segundo.", elapsed);

    println!("\n=== TEST: una clase vigilada interrumpe el sueño ===");
    let main_thread = ffi::current_thread();
    let helper = thread::spawn(move || {
        thread::sleep(Duration::from_millis(300));
        ffi::raise_thread(main_thread, SignalKind::Hangup).unwrap();
    });

    let t0 = Instant::now();
    rt.interruptible_sleep(10);
    let elapsed = t0.elapsed();
    helper.join().unwrap();
    // quedo armado el temporizador de 10 segundos, fuera
    ffi::arm_alarm(0);

    assert!(
        elapsed < Duration::from_secs(5),
        "La señal debía interrumpir el sueño, tardó {:?}",
        elapsed
    );
    assert!(
        rt.take(SignalKind::Hangup),
        "El handler debía marcar la bandera de SIGHUP."
    );
    println!("  [Main] SIGHUP despertó el sueño a los {:?}.", elapsed);

    println!("\n=== TEST: sigsuspend despierta con una señal dirigida al hilo ===");
    let (tx_tid, rx_tid) = mpsc::channel();
    let (tx_ok, rx_ok) = mpsc::channel();
    let worker = thread::spawn(move || {
        // la mascara heredada trae las vigiladas bloqueadas,
        // User1 se abre unicamente durante el suspend
        let mut mask = SigSet::current().unwrap();
        mask.remove(SignalKind::User1);
        tx_tid.send(ffi::current_thread()).unwrap();
        ffi::suspend(&mask);

        let rt = SignalRuntime::new();
        assert!(rt.take(SignalKind::User1), "La bandera de SIGUSR1 debía estar marcada.");
        tx_ok.send("desperto").unwrap();
    });

    let worker_tid = rx_tid.recv_timeout(Duration::from_secs(2)).unwrap();
    // darle chance de llegar al suspend
    thread::sleep(Duration::from_millis(200));
    ffi::raise_thread(worker_tid, SignalKind::User1).unwrap();

    let res = rx_ok.recv_timeout(Duration::from_secs(5));
    assert_eq!(res.unwrap(), "desperto", "El suspend nunca despertó.");
    worker.join().unwrap();
    println!("  [Main] El hilo suspendido despertó con la señal dirigida.");

    println!("\n  ✓ Test pasado: el sueño interrumpible se comporta.");
}
