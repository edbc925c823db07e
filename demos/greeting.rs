//! Demonstration of the localization bootstrap
//!
//! Run with a locale in the environment and a `res/` directory containing
//! compiled catalogs, e.g.:
//!
//! ```text
//! LANG=fr_FR cargo run --example greeting
//! ```

use lingo::{ntr, tr};

fn main() {
    let translator = lingo::init();

    if translator.is_pass_through() {
        eprintln!("(no catalog found for the current locale; messages are untranslated)");
    }

    println!("{}", tr("Hello"));
    for n in [1u64, 3] {
        println!("{}", ntr("One new message", "Several new messages", n));
    }
}
