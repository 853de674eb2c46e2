//! Minimal host driving the composer
//!
//! Mirrors a chat UI session: type a message, attach a file, submit, and
//! print the wire payload a real host would receive.
//!
//! ```bash
//! cargo run --example echo_host
//! ```

use anyhow::Result;
use libcomposer::{Composer, FileInput, MessagePayload};

fn main() -> Result<()> {
    libcomposer::logging::init_default();

    let mut composer = Composer::new();

    composer.set_text("Hello from the echo host!");
    let id = composer.attach(FileInput::new(
        "notes.txt",
        "text/plain",
        b"remember the milk".to_vec(),
    ))?;
    eprintln!("staged attachment {}", id);

    let message = composer.submit()?;
    println!("{}", MessagePayload::from(&message).to_json()?);

    // The draft is empty again; a bare submit now fails
    assert!(composer.submit().is_err());

    Ok(())
}
