//! AES block cipher implementation
//!
//! This module implements AES-128 single-block encryption as specified in
//! FIPS 197: key expansion plus the fixed 10-round
//! substitution/permutation/mixing transform.
//!
//! ## Key handling
//!
//! Key material is an explicit input to every operation. The expanded
//! schedule is derived once per [`Aes128`] value, stored in a zeroizing
//! buffer, and shared read-only by any number of concurrent block
//! encryptions; nothing is compiled in or read from process-global state.
//!
//! ## Timing behavior
//!
//! - All GF(2^8) arithmetic is branchless
//! - All 10 rounds execute unconditionally; control flow never depends on
//!   key or data bytes
//! - The S-box and round-constant tables are immutable statics fixed at
//!   compile time, with compiler fences around the substitution passes
//!
//! SubBytes is realized as a table lookup, so data-dependent cache effects
//! remain possible on some platforms. Where that matters, hardware AES
//! instructions are the appropriate tool; this is a portable software
//! implementation.

use crate::error::{validate, Result};
use api::SecretBytes;
use common::security::barrier;
use common::security::SecretBuffer;
use params::symmetric::{AES128_EXPANDED_KEY_SIZE, AES128_KEY_SIZE, AES128_ROUNDS, AES_BLOCK_SIZE};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{BlockCipher, CipherAlgorithm};

/// Round constants for AES key expansion
///
/// Entry i+1 is entry i's leading byte doubled in GF(2^8); the table is
/// kept as a literal and the derivation is pinned by a unit test.
const RCON: [u32; 11] = [
    0x00000000, 0x01000000, 0x02000000, 0x04000000, 0x08000000, 0x10000000, 0x20000000, 0x40000000,
    0x80000000, 0x1b000000, 0x36000000,
];

/// Multiply two bytes in GF(2^8) with AES's reduction poly x^8 + x^4 + x^3 + x + 1
///
/// Russian-peasant multiplication, branchless so that neither operand
/// influences the instruction sequence.
#[inline(always)]
const fn gf_mul(a: u8, b: u8) -> u8 {
    let mut p = 0u8;
    let mut a = a;
    let mut b = b;
    let mut i = 0;
    while i < 8 {
        // mask = 0xFF if b&1==1 else 0x00
        let mask = (b & 1).wrapping_neg();
        p ^= a & mask;
        let hi = a & 0x80;
        a <<= 1;
        // if hi was set, reduce by 0x1B
        a ^= ((hi != 0) as u8) * 0x1B;
        b >>= 1;
        i += 1;
    }
    p
}

/// Double a byte in GF(2^8)
#[inline(always)]
const fn xtime(byte: u8) -> u8 {
    let high = byte >> 7;
    (byte << 1) ^ (high * 0x1B)
}

/// Raise to the 254th power (the multiplicative inverse) in GF(2^8)
///
/// The full exponentiation runs even for x == 0; the result is masked to
/// zero afterwards.
const fn gf_inv(x: u8) -> u8 {
    let x2 = gf_mul(x, x);
    let x4 = gf_mul(x2, x2);
    let x8 = gf_mul(x4, x4);
    let x16 = gf_mul(x8, x8);
    let x32 = gf_mul(x16, x16);
    let x64 = gf_mul(x32, x32);
    let x128 = gf_mul(x64, x64);
    let mut y = gf_mul(x128, x64);
    y = gf_mul(y, x32);
    y = gf_mul(y, x16);
    y = gf_mul(y, x8);
    y = gf_mul(y, x4);
    y = gf_mul(y, x2);

    // mask = 0xFF if x != 0, else 0x00
    let mask = ((x != 0) as u8).wrapping_neg();
    y & mask
}

/// Forward S-box entry: inv(x) ^ ROTL(inv(x), 1..=4) ^ 0x63
const fn sbox_entry(x: u8) -> u8 {
    let i = gf_inv(x);
    i ^ i.rotate_left(1) ^ i.rotate_left(2) ^ i.rotate_left(3) ^ i.rotate_left(4) ^ 0x63
}

/// The forward AES substitution table
///
/// Computed once at compile time from the field inverse and affine map;
/// process-wide, read-only, never caller-parameterized.
static SBOX: [u8; 256] = {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = sbox_entry(i as u8);
        i += 1;
    }
    table
};

/// Substitutes each byte of a big-endian word through the S-box
#[inline(always)]
fn sub_word(word: u32) -> u32 {
    let b = word.to_be_bytes();
    u32::from_be_bytes([
        SBOX[b[0] as usize],
        SBOX[b[1] as usize],
        SBOX[b[2] as usize],
        SBOX[b[3] as usize],
    ])
}

/// Rotates a word left by 8 bits (1 byte)
#[inline(always)]
fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

/// Type-level constants for AES-128
pub enum Aes128Algorithm {}

impl CipherAlgorithm for Aes128Algorithm {
    const KEY_SIZE: usize = AES128_KEY_SIZE;
    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    fn name() -> &'static str {
        "AES-128"
    }
}

/// AES-128 block cipher
///
/// Owns the expanded key schedule; the schedule is immutable after
/// derivation and wiped when the cipher is dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes128 {
    round_keys: SecretBuffer<AES128_EXPANDED_KEY_SIZE>,
}

impl core::fmt::Debug for Aes128 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Aes128").finish_non_exhaustive()
    }
}

impl CipherAlgorithm for Aes128 {
    const KEY_SIZE: usize = AES128_KEY_SIZE;
    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    fn name() -> &'static str {
        "AES-128"
    }
}

impl Aes128 {
    /// Performs AES-128 key expansion
    ///
    /// Derives the 44 schedule words from the 16 key bytes. Round key 0 is
    /// the master key unchanged; identical keys always yield identical
    /// schedules.
    fn expand_key(key: &[u8]) -> Result<SecretBuffer<AES128_EXPANDED_KEY_SIZE>> {
        validate::length("AES-128 key", key.len(), AES128_KEY_SIZE)?;

        let mut words = [0u32; 44];

        for (i, chunk) in key.chunks_exact(4).enumerate() {
            words[i] = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        for i in 4..44 {
            let mut temp = words[i - 1];
            if i % 4 == 0 {
                temp = sub_word(rot_word(temp)) ^ RCON[i / 4];
            }
            words[i] = words[i - 4] ^ temp;
        }

        let mut schedule = [0u8; AES128_EXPANDED_KEY_SIZE];
        for (i, word) in words.iter().enumerate() {
            schedule[i * 4..(i + 1) * 4].copy_from_slice(&word.to_be_bytes());
        }

        // The word array holds key material too
        words.zeroize();

        Ok(SecretBuffer::new(schedule))
    }

    /// Builds a cipher from a key of untrusted length
    ///
    /// Keys that are not exactly 16 bytes are rejected, never truncated or
    /// padded.
    pub fn new_from_slice(key: &[u8]) -> Result<Self> {
        Ok(Aes128 {
            round_keys: Self::expand_key(key)?,
        })
    }

    /// One-shot encryption of a single block
    ///
    /// Expands the key, encrypts the block in place, and drops the schedule
    /// (zeroized) before returning. Callers encrypting more than one block
    /// under the same key should construct the cipher once instead.
    pub fn encrypt_block_with(key: &SecretBytes<16>, block: &mut [u8]) -> Result<()> {
        Self::new(key).encrypt_block(block)
    }

    /// SubBytes step
    fn sub_bytes(state: &mut [u8; 16]) {
        for byte in state.iter_mut() {
            *byte = SBOX[*byte as usize];
        }
        // keep the table reads anchored around the substitution pass
        barrier::compiler_fence_seq_cst();
    }

    /// ShiftRows step
    ///
    /// Row r of the column-major state occupies indices r, r+4, r+8, r+12
    /// and rotates left by r positions; row 0 is untouched.
    fn shift_rows(state: &mut [u8; 16]) {
        let tmp = *state;
        for r in 1..4 {
            for c in 0..4 {
                state[r + 4 * c] = tmp[r + 4 * ((c + r) % 4)];
            }
        }
    }

    /// MixColumns step
    ///
    /// Each column is multiplied by [[02,03,01,01],[01,02,03,01],
    /// [01,01,02,03],[03,01,01,02]] over GF(2^8); 03·x is 02·x ^ x.
    fn mix_columns(state: &mut [u8; 16]) {
        for c in 0..4 {
            let i = c * 4;
            let [s0, s1, s2, s3] = [state[i], state[i + 1], state[i + 2], state[i + 3]];
            state[i] = xtime(s0) ^ (xtime(s1) ^ s1) ^ s2 ^ s3;
            state[i + 1] = s0 ^ xtime(s1) ^ (xtime(s2) ^ s2) ^ s3;
            state[i + 2] = s0 ^ s1 ^ xtime(s2) ^ (xtime(s3) ^ s3);
            state[i + 3] = (xtime(s0) ^ s0) ^ s1 ^ s2 ^ xtime(s3);
        }
    }

    /// AddRoundKey step
    fn add_round_key(state: &mut [u8; 16], round_key: &[u8]) -> Result<()> {
        validate::min_length("AES round key", round_key.len(), AES_BLOCK_SIZE)?;

        for (s, k) in state.iter_mut().zip(round_key.iter()) {
            *s ^= *k;
        }
        Ok(())
    }
}

impl BlockCipher for Aes128 {
    type Algorithm = Aes128Algorithm;
    type Key = SecretBytes<16>;

    fn new(key: &Self::Key) -> Self {
        // SecretBytes<16> guarantees the length, so expansion cannot fail
        let round_keys = Self::expand_key(key.as_ref())
            .expect("AES-128 key expansion should not fail");

        Aes128 { round_keys }
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;

        let round_key_bytes = self.round_keys.as_ref();

        // Touch the schedule and the substitution table before the first
        // round so the lookups below hit warm lines.
        let mut _warm: u8 = 0;
        for &b in round_key_bytes {
            _warm = _warm.wrapping_add(b);
        }
        for &b in SBOX.iter() {
            _warm = _warm.wrapping_add(b);
        }
        barrier::compiler_fence_seq_cst();

        // Load the block into the column-major working state
        let mut state = [0u8; 16];
        state.copy_from_slice(block);

        // Initial round - AddRoundKey
        Self::add_round_key(&mut state, &round_key_bytes[0..16])?;

        // Main rounds
        for round in 1..AES128_ROUNDS {
            Self::sub_bytes(&mut state);
            Self::shift_rows(&mut state);
            Self::mix_columns(&mut state);

            let offset = round * 16;
            Self::add_round_key(&mut state, &round_key_bytes[offset..offset + 16])?;
        }

        // Final round omits MixColumns
        Self::sub_bytes(&mut state);
        Self::shift_rows(&mut state);
        Self::add_round_key(&mut state, &round_key_bytes[160..176])?;

        block.copy_from_slice(&state);
        Ok(())
    }

    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> Self::Key {
        let mut key_data = [0u8; AES128_KEY_SIZE];
        rng.fill_bytes(&mut key_data);
        SecretBytes::new(key_data)
    }
}
