//! salida de los demos, redirigible
//! por defecto va a consola; un frontend puede colgarse con redirect()
//! antes de arrancar el demo y quedarse con cada linea

use core::sync::atomic::{AtomicPtr, Ordering};

/// firma del destino de salida
pub type SinkFn = fn(&str);

// puntero de funcion en un slot atomico, sin mutex de por medio
// se asume que redirect() corre antes de que haya hilos emitiendo
static SINK: AtomicPtr<()> = AtomicPtr::new(console_sink as *mut ());

fn console_sink(line: &str) {
    println!("{}", line);
}

/// cambia el destino de las lineas de los demos
#[inline]
pub fn redirect(sink: SinkFn) {
    SINK.store(sink as *mut (), Ordering::Relaxed);
}

/// vuelve al destino por defecto
#[inline]
pub fn to_console() {
    SINK.store(console_sink as *mut (), Ordering::Relaxed);
}

/// emite una linea por el destino vigente
#[inline]
pub fn emit(line: &str) {
    let p = SINK.load(Ordering::Relaxed);
    let sink: SinkFn = unsafe { core::mem::transmute(p) };
    sink(line);
}

#[macro_export]
macro_rules! sl_log {
    ($($arg:tt)*) => {{
        $crate::log::emit(&format!($($arg)*));
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static CAPTURED: Mutex<Vec<String>> = Mutex::new(Vec::new());

    fn capture(line: &str) {
        CAPTURED.lock().unwrap().push(line.to_string());
    }

    #[test]
    fn test_redirigir_la_salida() {
        redirect(capture);
        emit("hola demo");
        to_console();

        let lines = CAPTURED.lock().unwrap();
        assert_eq!(lines.as_slice(), ["hola demo"]);
    }
}
