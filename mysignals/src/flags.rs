//! banderas atomicas que el handler marca y el hilo principal drena
//! el cuerpo del handler queda reducido a stores atomicos, que si son
//! seguros dentro de un handler, a diferencia de printf y compañia

use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};

use crate::events::SignalKind;

/// Estado compartido entre el handler y el hilo principal.
///
/// Una bandera booleana por clase: varios envíos de la misma clase mientras
/// nadie drena colapsan en una sola indicación, igual que las señales
/// estándar del kernel, que tampoco se encolan.
pub struct SignalFlags {
    hangup: AtomicBool,
    user1: AtomicBool,
    terminate: AtomicBool,
    alarm: AtomicBool,
    // numero crudo de una señal que no mapea a SignalKind, 0 si no hay
    unexpected: AtomicI32,
}

/// instancia unica del proceso, el handler extern "C" necesita un static
pub static FLAGS: SignalFlags = SignalFlags::new();

impl SignalFlags {
    pub const fn new() -> Self {
        Self {
            hangup: AtomicBool::new(false),
            user1: AtomicBool::new(false),
            terminate: AtomicBool::new(false),
            alarm: AtomicBool::new(false),
            unexpected: AtomicI32::new(0),
        }
    }

    fn slot(&self, kind: SignalKind) -> &AtomicBool {
        match kind {
            SignalKind::Hangup => &self.hangup,
            SignalKind::User1 => &self.user1,
            SignalKind::Terminate => &self.terminate,
            SignalKind::Alarm => &self.alarm,
        }
    }

    /// marca la llegada de una clase, seguro de llamar desde el handler
    pub fn post(&self, kind: SignalKind) {
        self.slot(kind).store(true, Ordering::SeqCst);
    }

    /// consume la bandera, true si estaba marcada
    pub fn take(&self, kind: SignalKind) -> bool {
        self.slot(kind).swap(false, Ordering::SeqCst)
    }

    /// consulta sin consumir
    pub fn is_set(&self, kind: SignalKind) -> bool {
        self.slot(kind).load(Ordering::SeqCst)
    }

    /// consume la primera informativa marcada, Hangup antes que User1
    pub fn take_informative(&self) -> Option<SignalKind> {
        for kind in SignalKind::INFORMATIVE {
            if self.take(kind) {
                return Some(kind);
            }
        }
        None
    }

    /// registra una señal fuera del conjunto, tambien seguro en el handler
    pub fn post_unexpected(&self, raw: i32) {
        self.unexpected.store(raw, Ordering::SeqCst);
    }

    /// consume el numero crudo inesperado si lo hay
    pub fn take_unexpected(&self) -> Option<i32> {
        match self.unexpected.swap(0, Ordering::SeqCst) {
            0 => None,
            raw => Some(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_duplicado_colapsa_en_una_indicacion() {
        let flags = SignalFlags::new();
        flags.post(SignalKind::User1);
        flags.post(SignalKind::User1);
        flags.post(SignalKind::User1);
        assert!(flags.take(SignalKind::User1));
        // los envios extra no dejan rastro
        assert!(!flags.take(SignalKind::User1));
    }

    #[test]
    fn test_clases_independientes() {
        let flags = SignalFlags::new();
        flags.post(SignalKind::Hangup);
        flags.post(SignalKind::Terminate);
        assert!(!flags.is_set(SignalKind::User1));
        assert!(flags.take(SignalKind::Terminate));
        assert!(flags.take(SignalKind::Hangup));
    }

    #[test]
    fn test_prioridad_informativa() {
        let flags = SignalFlags::new();
        flags.post(SignalKind::User1);
        flags.post(SignalKind::Hangup);
        // hangup se drena primero aunque user1 llego antes
        assert_eq!(flags.take_informative(), Some(SignalKind::Hangup));
        assert_eq!(flags.take_informative(), Some(SignalKind::User1));
        assert_eq!(flags.take_informative(), None);
    }

    #[test]
    fn test_senal_inesperada() {
        let flags = SignalFlags::new();
        assert_eq!(flags.take_unexpected(), None);
        flags.post_unexpected(libc::SIGWINCH);
        assert_eq!(flags.take_unexpected(), Some(libc::SIGWINCH));
        assert_eq!(flags.take_unexpected(), None);
    }
}
