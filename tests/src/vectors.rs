//! Published known-answer vectors for AES-128 single-block encryption

/// A single-block known-answer vector, hex encoded
pub struct BlockVector {
    /// 16-byte key
    pub key: &'static str,
    /// 16-byte plaintext block
    pub plaintext: &'static str,
    /// Expected 16-byte ciphertext block
    pub ciphertext: &'static str,
}

/// FIPS-197 Appendix C.1
pub const FIPS197_C1: BlockVector = BlockVector {
    key: "000102030405060708090a0b0c0d0e0f",
    plaintext: "00112233445566778899aabbccddeeff",
    ciphertext: "69c4e0d86a7b0430d8cdb78070b4c55a",
};

/// NIST SP 800-38A, ECB-AES128.Encrypt (one key, four blocks)
pub const SP800_38A_ECB: [BlockVector; 4] = [
    BlockVector {
        key: "2b7e151628aed2a6abf7158809cf4f3c",
        plaintext: "6bc1bee22e409f96e93d7e117393172a",
        ciphertext: "3ad77bb40d7a3660a89ecaf32466ef97",
    },
    BlockVector {
        key: "2b7e151628aed2a6abf7158809cf4f3c",
        plaintext: "ae2d8a571e03ac9c9eb76fac45af8e51",
        ciphertext: "f5d3d58503b9699de785895a96fdbaaf",
    },
    BlockVector {
        key: "2b7e151628aed2a6abf7158809cf4f3c",
        plaintext: "30c81c46a35ce411e5fbc1191a0a52ef",
        ciphertext: "43b1cd7f598ece23881b00e3ed030688",
    },
    BlockVector {
        key: "2b7e151628aed2a6abf7158809cf4f3c",
        plaintext: "f69f2445df4f9b17ad2b417be66c3710",
        ciphertext: "7b0c785e27e8ad3f8223207104725dd4",
    },
];

/// Decode a hex test vector field
pub fn decode(field: &str) -> Vec<u8> {
    hex::decode(field).expect("test vector hex")
}
