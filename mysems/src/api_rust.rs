//! api rust amigable para los demos
//! wrappers con firmas tipo sem_t que operan sobre un handle compartido

use std::sync::Arc;
use std::time::Duration;

use crate::semaphore::{MySemaphore, SemError};

/// handle del semaforo compartido por todos los hilos del proceso
pub type SharedSem = Arc<MySemaphore>;

/// helper para crear un handle compartido ya validado
pub fn shared_sem(initial: u32) -> Result<SharedSem, SemError> {
    Ok(Arc::new(MySemaphore::new(initial)?))
}

// inicializa el semaforo con el conteo dado
pub fn my_sem_init(initial: u32) -> Result<SharedSem, SemError> {
    shared_sem(initial)
}

// bloquea hasta poder decrementar
pub fn my_sem_wait(sem: &MySemaphore) {
    sem.acquire();
}

// espera acotada, true si decremento
pub fn my_sem_timedwait(sem: &MySemaphore, dur: Duration) -> bool {
    sem.acquire_timeout(dur)
}

// intento no bloqueante, true si decremento
pub fn my_sem_trywait(sem: &MySemaphore) -> bool {
    sem.try_acquire()
}

// incrementa y despierta a lo sumo un hilo en espera
// es una sola llamada sin bloqueo ni alocacion, segura para un productor
// con contexto restringido estilo isr
pub fn my_sem_post(sem: &MySemaphore) {
    sem.release();
}

// conteo actual
pub fn my_sem_getvalue(sem: &MySemaphore) -> u32 {
    sem.value()
}
