//! enum de notificaciones asincronas que maneja el proceso

use libc::c_int;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    Hangup,    // SIGHUP informativa
    User1,     // SIGUSR1 informativa
    Terminate, // SIGINT pide terminar el proceso
    Alarm,     // SIGALRM solo interrumpe el sueño
}

impl SignalKind {
    /// las dos clases informativas, en orden de prioridad de entrega
    pub const INFORMATIVE: [SignalKind; 2] = [SignalKind::Hangup, SignalKind::User1];

    pub fn raw(self) -> c_int {
        match self {
            SignalKind::Hangup => libc::SIGHUP,
            SignalKind::User1 => libc::SIGUSR1,
            SignalKind::Terminate => libc::SIGINT,
            SignalKind::Alarm => libc::SIGALRM,
        }
    }

    pub fn from_raw(sig: c_int) -> Option<SignalKind> {
        match sig {
            libc::SIGHUP => Some(SignalKind::Hangup),
            libc::SIGUSR1 => Some(SignalKind::User1),
            libc::SIGINT => Some(SignalKind::Terminate),
            libc::SIGALRM => Some(SignalKind::Alarm),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SignalKind::Hangup => "SIGHUP",
            SignalKind::User1 => "SIGUSR1",
            SignalKind::Terminate => "SIGINT",
            SignalKind::Alarm => "SIGALRM",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ida_y_vuelta_con_numeros_crudos() {
        for kind in [
            SignalKind::Hangup,
            SignalKind::User1,
            SignalKind::Terminate,
            SignalKind::Alarm,
        ] {
            assert_eq!(SignalKind::from_raw(kind.raw()), Some(kind));
        }
        // una señal fuera del conjunto no mapea
        assert_eq!(SignalKind::from_raw(libc::SIGSEGV), None);
    }

    #[test]
    fn test_nombres() {
        assert_eq!(SignalKind::Hangup.name(), "SIGHUP");
        assert_eq!(SignalKind::Terminate.name(), "SIGINT");
    }
}
