//! Minimal sRGB ICC profile construction for PDF/A `/OutputIntents`.
//!
//! PDF/A-4 requires a device-independent output intent referencing an
//! embedded ICC profile stream. We synthesize a minimal but structurally
//! valid ICC v2.1 profile (header, tag table, XYZ/TRC tags) identifying as
//! sRGB IEC61966-2.1 rather than shipping a full third-party profile.

/// Builds a minimal sRGB ICC profile (v2.1, monitor class) as raw bytes.
pub fn build_srgb_icc_profile() -> Vec<u8> {
    let mut profile = Vec::new();

    // --- Header (128 bytes) ---
    profile.extend_from_slice(&[0, 0, 0, 0]); // profile size, patched at the end
    profile.extend_from_slice(b"appl"); // CMM type
    profile.extend_from_slice(&[0x02, 0x10, 0x00, 0x00]); // version 2.1.0
    profile.extend_from_slice(b"mntr"); // device class: monitor
    profile.extend_from_slice(b"RGB "); // color space
    profile.extend_from_slice(b"XYZ "); // profile connection space
    profile.extend_from_slice(&[0u8; 12]); // datetime
    profile.extend_from_slice(b"acsp"); // profile file signature
    profile.extend_from_slice(b"APPL"); // primary platform
    profile.extend_from_slice(&[0u8; 4]); // flags
    profile.extend_from_slice(&[0u8; 4]); // device manufacturer
    profile.extend_from_slice(&[0u8; 4]); // device model
    profile.extend_from_slice(&[0u8; 8]); // device attributes
    profile.extend_from_slice(&[0, 0, 0, 0]); // rendering intent: perceptual
    // PCS illuminant, D50
    profile.extend_from_slice(&to_s15fixed16(0.9642).to_be_bytes());
    profile.extend_from_slice(&to_s15fixed16(1.0000).to_be_bytes());
    profile.extend_from_slice(&to_s15fixed16(0.8249).to_be_bytes());
    profile.extend_from_slice(&[0u8; 4]); // profile creator
    profile.extend_from_slice(&[0u8; 16]); // profile ID (MD5, unset)
    profile.extend_from_slice(&[0u8; 28]); // reserved

    // --- Tag table ---
    let tags: &[(&[u8; 4], &[u8])] = &[
        (b"desc", b"sRGB IEC61966-2.1"),
        (b"cprt", b"Public Domain"),
        (b"wtpt", &xyz_bytes(0.9505, 1.0, 1.0890)), // D65 white point
        (b"rXYZ", &xyz_bytes(0.4360, 0.2225, 0.0139)),
        (b"gXYZ", &xyz_bytes(0.3851, 0.7169, 0.0971)),
        (b"bXYZ", &xyz_bytes(0.1431, 0.0606, 0.7139)),
        (b"rTRC", &gamma_bytes()),
        (b"gTRC", &gamma_bytes()),
        (b"bTRC", &gamma_bytes()),
    ];

    let tag_table_start = profile.len();
    let tag_data_start = tag_table_start + 4 + tags.len() * 12;

    let wrapped: Vec<Vec<u8>> = tags.iter().map(|(sig, data)| wrap_tag(sig, data)).collect();
    let mut offsets = Vec::with_capacity(wrapped.len());
    let mut cursor = tag_data_start;
    for block in &wrapped {
        offsets.push(cursor);
        cursor += block.len();
        while cursor % 4 != 0 {
            cursor += 1;
        }
    }

    profile.extend_from_slice(&(tags.len() as u32).to_be_bytes());
    for ((sig, _), (offset, block)) in tags.iter().zip(offsets.iter().zip(wrapped.iter())) {
        profile.extend_from_slice(*sig);
        profile.extend_from_slice(&(*offset as u32).to_be_bytes());
        profile.extend_from_slice(&(block.len() as u32).to_be_bytes());
    }

    for block in &wrapped {
        profile.extend_from_slice(block);
        while profile.len() % 4 != 0 {
            profile.push(0);
        }
    }

    let size = profile.len() as u32;
    profile[0..4].copy_from_slice(&size.to_be_bytes());
    profile
}

fn xyz_bytes(x: f64, y: f64, z: f64) -> [u8; 12] {
    let mut out = [0u8; 12];
    out[0..4].copy_from_slice(&to_s15fixed16(x).to_be_bytes());
    out[4..8].copy_from_slice(&to_s15fixed16(y).to_be_bytes());
    out[8..12].copy_from_slice(&to_s15fixed16(z).to_be_bytes());
    out
}

fn gamma_bytes() -> [u8; 2] {
    // u8Fixed8Number, gamma ~2.2
    let fixed = (2.2 * 256.0) as u16;
    fixed.to_be_bytes()
}

fn to_s15fixed16(value: f64) -> i32 {
    (value * 65536.0).round() as i32
}

fn wrap_tag(sig: &[u8; 4], data: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    match sig {
        b"desc" => {
            out.extend_from_slice(b"desc");
            out.extend_from_slice(&[0, 0, 0, 0]);
            out.extend_from_slice(&((data.len() + 1) as u32).to_be_bytes());
            out.extend_from_slice(data);
            out.push(0);
            out.extend_from_slice(&[0, 0, 0, 0]); // unicode count
            out.extend_from_slice(&[0, 0, 0, 0]); // unicode lang code
            out.extend_from_slice(&[0, 0]); // scriptcode count
            out.push(0);
            out.extend_from_slice(&[0u8; 67]);
        }
        b"cprt" => {
            out.extend_from_slice(b"text");
            out.extend_from_slice(&[0, 0, 0, 0]);
            out.extend_from_slice(data);
            out.push(0);
        }
        b"wtpt" | b"rXYZ" | b"gXYZ" | b"bXYZ" => {
            out.extend_from_slice(b"XYZ ");
            out.extend_from_slice(&[0, 0, 0, 0]);
            out.extend_from_slice(data);
        }
        b"rTRC" | b"gTRC" | b"bTRC" => {
            out.extend_from_slice(b"curv");
            out.extend_from_slice(&[0, 0, 0, 0]);
            out.extend_from_slice(&[0, 0, 0, 1]); // one curve entry: gamma
            out.extend_from_slice(data);
        }
        _ => out.extend_from_slice(data),
    }
    out
}
