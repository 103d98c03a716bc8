//! mysems semaforo contador para los demos
//! expone la primitiva y una api amigable con firmas tipo sem_t

pub mod semaphore;
pub mod api_rust;

pub use semaphore::{MySemaphore, SemError, MY_SEM_MAX};
pub use api_rust::{
    my_sem_init, my_sem_wait, my_sem_timedwait, my_sem_trywait,
    my_sem_post, my_sem_getvalue, shared_sem, SharedSem,
};
