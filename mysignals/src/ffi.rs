//! capa delgada sobre las llamadas de señales de libc
//! expone firmas seguras equivalentes a sigaction, sigprocmask y sigsuspend
//! los errores salen como io::Error con el errno real

use std::io;
use std::mem;
use std::ptr;

use libc::c_int;

use crate::events::SignalKind;

/// firma que debe tener un handler instalable
pub type HandlerFn = extern "C" fn(c_int);

/// conjunto de señales, envoltura de sigset_t
#[derive(Clone, Copy)]
pub struct SigSet(libc::sigset_t);

impl SigSet {
    /// conjunto vacio
    pub fn empty() -> SigSet {
        unsafe {
            let mut set: libc::sigset_t = mem::zeroed();
            libc::sigemptyset(&mut set);
            SigSet(set)
        }
    }

    /// conjunto con todas las señales
    pub fn full() -> SigSet {
        unsafe {
            let mut set: libc::sigset_t = mem::zeroed();
            libc::sigfillset(&mut set);
            SigSet(set)
        }
    }

    /// mascara actual del hilo que llama
    pub fn current() -> io::Result<SigSet> {
        unsafe {
            let mut set: libc::sigset_t = mem::zeroed();
            // con el segundo argumento nulo solo consulta
            let rc = libc::pthread_sigmask(libc::SIG_BLOCK, ptr::null(), &mut set);
            if rc != 0 {
                return Err(io::Error::from_raw_os_error(rc));
            }
            Ok(SigSet(set))
        }
    }

    pub fn add(&mut self, kind: SignalKind) {
        unsafe {
            libc::sigaddset(&mut self.0, kind.raw());
        }
    }

    pub fn remove(&mut self, kind: SignalKind) {
        unsafe {
            libc::sigdelset(&mut self.0, kind.raw());
        }
    }

    pub fn contains(&self, kind: SignalKind) -> bool {
        unsafe { libc::sigismember(&self.0, kind.raw()) == 1 }
    }

    fn raw(&self) -> &libc::sigset_t {
        &self.0
    }
}

/// instala un handler para una clase conocida
pub fn install_handler(kind: SignalKind, handler: HandlerFn, oneshot: bool) -> io::Result<()> {
    install_handler_raw(kind.raw(), handler, oneshot)
}

/// instala un handler por numero crudo
///
/// oneshot usa SA_RESETHAND: el handler se desinstala solo tras la primera
/// entrega. El caso normal usa SA_RESTART para reintentar llamadas
/// interrumpidas. En ambos casos sa_mask queda llena: todas las señales
/// bloqueadas durante el handler.
pub fn install_handler_raw(signum: c_int, handler: HandlerFn, oneshot: bool) -> io::Result<()> {
    unsafe {
        let mut sa: libc::sigaction = mem::zeroed();
        sa.sa_sigaction = handler as usize;
        sa.sa_flags = if oneshot {
            libc::SA_RESETHAND
        } else {
            libc::SA_RESTART
        };
        libc::sigfillset(&mut sa.sa_mask);
        if libc::sigaction(signum, &sa, ptr::null_mut()) == -1 {
            return Err(io::Error::last_os_error());
        }
    }
    Ok(())
}

/// reemplaza la mascara del hilo y devuelve la anterior
pub fn set_mask(set: &SigSet) -> io::Result<SigSet> {
    mask_op(libc::SIG_SETMASK, set)
}

/// agrega señales a la mascara del hilo y devuelve la anterior
pub fn block(set: &SigSet) -> io::Result<SigSet> {
    mask_op(libc::SIG_BLOCK, set)
}

/// quita señales de la mascara del hilo y devuelve la anterior
/// si habia pendientes de ese conjunto se entregan aqui mismo
pub fn unblock(set: &SigSet) -> io::Result<SigSet> {
    mask_op(libc::SIG_UNBLOCK, set)
}

/// bloquea todas las señales y devuelve la mascara anterior
pub fn block_all() -> io::Result<SigSet> {
    block(&SigSet::full())
}

fn mask_op(how: c_int, set: &SigSet) -> io::Result<SigSet> {
    unsafe {
        let mut old: libc::sigset_t = mem::zeroed();
        // pthread_sigmask y no sigprocmask: la mascara es por hilo y los
        // tests corren con varios
        let rc = libc::pthread_sigmask(how, set.raw(), &mut old);
        if rc != 0 {
            return Err(io::Error::from_raw_os_error(rc));
        }
        Ok(SigSet(old))
    }
}

/// conjunto de señales bloqueadas pendientes de entrega
pub fn pending() -> io::Result<SigSet> {
    unsafe {
        let mut set: libc::sigset_t = mem::zeroed();
        if libc::sigpending(&mut set) == -1 {
            return Err(io::Error::last_os_error());
        }
        Ok(SigSet(set))
    }
}

/// Cambia la máscara del hilo por la dada y bloquea hasta que se entregue
/// una señal no enmascarada. El cambio de máscara y el bloqueo son una sola
/// operación atómica del kernel: una señal que llegue entre calcular la
/// máscara y suspender no puede perderse.
///
/// sigsuspend siempre retorna -1 con EINTR tras correr un handler, así que
/// aquí no hay error que propagar.
pub fn suspend(mask: &SigSet) {
    unsafe {
        libc::sigsuspend(mask.raw());
    }
}

/// arma el temporizador de SIGALRM, devuelve los segundos que quedaban
pub fn arm_alarm(secs: u32) -> u32 {
    unsafe { libc::alarm(secs) }
}

/// pid del proceso, para enviarle señales desde otra terminal
pub fn process_id() -> i32 {
    unsafe { libc::getpid() }
}

/// envia una señal al hilo que llama, para los tests
pub fn raise(kind: SignalKind) -> io::Result<()> {
    unsafe {
        if libc::raise(kind.raw()) != 0 {
            return Err(io::Error::last_os_error());
        }
    }
    Ok(())
}

/// identidad del hilo actual para raise_thread
pub fn current_thread() -> libc::pthread_t {
    unsafe { libc::pthread_self() }
}

/// envia una señal dirigida a un hilo especifico, para los tests
pub fn raise_thread(thread: libc::pthread_t, kind: SignalKind) -> io::Result<()> {
    unsafe {
        let rc = libc::pthread_kill(thread, kind.raw());
        if rc != 0 {
            return Err(io::Error::from_raw_os_error(rc));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conjuntos() {
        let mut set = SigSet::empty();
        assert!(!set.contains(SignalKind::Hangup));
        set.add(SignalKind::Hangup);
        assert!(set.contains(SignalKind::Hangup));
        assert!(!set.contains(SignalKind::User1));
        set.remove(SignalKind::Hangup);
        assert!(!set.contains(SignalKind::Hangup));

        let full = SigSet::full();
        assert!(full.contains(SignalKind::Alarm));
        assert!(full.contains(SignalKind::Terminate));
    }

    #[test]
    fn test_mascara_del_hilo() {
        // bloquear una señal se refleja en la mascara consultada
        let mut set = SigSet::empty();
        set.add(SignalKind::User1);
        let old = block(&set).unwrap();
        assert!(SigSet::current().unwrap().contains(SignalKind::User1));
        set_mask(&old).unwrap();
    }
}
