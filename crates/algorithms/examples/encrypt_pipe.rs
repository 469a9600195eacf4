//! Chunked-pipe encryption demo
//!
//! Reads 16-byte chunks from stdin until no complete chunk remains,
//! encrypts each with the key given as a hex argument, and writes the
//! ciphertext blocks to stdout in order. A trailing chunk shorter than one
//! block is silently discarded; no padding is applied. Key provisioning is
//! the caller's concern, which is why the key arrives as an argument and is
//! never baked into the binary.
//!
//! ```text
//! encrypt_pipe 000102030405060708090a0b0c0d0e0f < plain.bin > cipher.bin
//! ```

use std::env;
use std::io::{self, Read, Write};

use api::{Error, Result, SecretBytes};
use blockcrypt_algorithms::block::{Aes128, BlockCipher};
use common::ZeroizeGuard;

/// Fill `buf` from `reader`, tolerating short reads. Returns the number of
/// bytes actually read; anything less than a full buffer means end of input.
fn read_block<R: Read>(reader: &mut R, buf: &mut [u8; 16]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        let n = reader.read(&mut buf[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    Ok(filled)
}

fn main() -> Result<()> {
    let key_hex = env::args().nth(1).ok_or_else(|| Error::InvalidParameter {
        context: "key argument",
        message: "usage: encrypt_pipe <32-hex-digit-key>".into(),
    })?;

    let mut key_bytes = hex::decode(&key_hex).map_err(|_| Error::InvalidParameter {
        context: "key argument",
        message: "key must be hexadecimal".into(),
    })?;

    // Scrub the decoded key bytes once the SecretBytes copy exists
    let key = {
        let guarded = ZeroizeGuard::new(&mut key_bytes);
        SecretBytes::<16>::from_slice(guarded.as_slice())?
    };
    let cipher = Aes128::new(&key);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    let mut block = [0u8; 16];
    while read_block(&mut input, &mut block)? == block.len() {
        cipher.encrypt_block(&mut block)?;
        output.write_all(&block)?;
    }
    output.flush()?;

    Ok(())
}
