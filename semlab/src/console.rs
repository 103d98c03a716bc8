//! lectura simple de consola para pausar los demos
//! el equivalente de los getchar del clasico "presione una tecla"

use std::io::{self, BufRead, Write};

/// Imprime el mensaje y espera a que el usuario presione enter.
///
/// Un EOF (por ejemplo con la entrada redirigida) cuenta como enter,
/// así el demo también corre sin terminal.
pub fn pause(msg: &str) {
    print!("{} ", msg);
    let _ = io::stdout().flush();

    let mut line = String::new();
    let _ = io::stdin().lock().read_line(&mut line);
}
