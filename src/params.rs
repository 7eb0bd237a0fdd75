/// Byte sizes of a simulated KEM parameter set.
///
/// The simulated scheme has no lattice structure, so a parameter set is only
/// the shape of the random buffers it produces.
pub trait KemParams {
    /// Human-readable name used in logs and reports.
    const NAME: &'static str;
    /// Public key size in bytes.
    const PK_SIZE: usize;
    /// Secret key size in bytes.
    const SK_SIZE: usize;
    /// Ciphertext size in bytes.
    const CT_SIZE: usize;
}

/// The demonstration parameter set: 32-byte keys and a 64-byte ciphertext.
pub struct Demo;

impl KemParams for Demo {
    const NAME: &'static str = "demo";
    const PK_SIZE: usize = 32;
    const SK_SIZE: usize = 32;
    const CT_SIZE: usize = 64;
}

/// Buffers shaped like Kyber512 (NIST Level 1) keys and ciphertexts.
///
/// Useful when the size comparison should reflect what a real Kyber512
/// exchange puts on the wire. The contents are still plain random bytes.
pub struct Kyber512Sized;

impl KemParams for Kyber512Sized {
    const NAME: &'static str = "kyber512-sized";
    const PK_SIZE: usize = 800;
    const SK_SIZE: usize = 1632;
    const CT_SIZE: usize = 768;
}
