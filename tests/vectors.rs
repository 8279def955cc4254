use anyhow::Result;
use hex_literal::hex;

use cryptohash::{hash, hash_hex, GostParams, HashContext, HashType};

#[test]
fn empty_input() {
    assert_eq!(
        hash_hex(HashType::Md5, b""),
        "d41d8cd98f00b204e9800998ecf8427e"
    );
    assert_eq!(
        hash_hex(HashType::Sha1, b""),
        "da39a3ee5e6b4b0d3255bfef95601890afd80709"
    );
    assert_eq!(
        hash_hex(HashType::Gost, b""),
        "ce85b99cc46752fffee35cab9a7b0278abb4c2d2055cff685af4912c49490f8d"
    );
}

#[test]
fn empty_input_crypto_pro() -> Result<()> {
    let mut ctx = HashContext::with_gost_params(GostParams::CryptoPro);
    assert_eq!(
        ctx.get_string()?,
        "981e5f3ca30c841487830f84fb433e13ac1101569b9c13584ac483234cd656c0"
    );
    Ok(())
}

#[test]
fn abc_raw_digests() {
    assert_eq!(
        hash(HashType::Md5, "abc").as_bytes(),
        hex!("900150983cd24fb0d6963f7d28e17f72")
    );
    assert_eq!(
        hash(HashType::Sha1, "abc").as_bytes(),
        hex!("a9993e364706816aba3e25717850c26c9cd0d89d")
    );
    assert_eq!(
        hash(HashType::Gost, "abc").as_bytes(),
        hex!("f3134348c44fb1b2a277729e2285ebb5cb5e0f29c975bc753b70497c06a4d51d")
    );
}

#[test]
fn million_a_md5() -> Result<()> {
    let mut ctx = HashContext::new(HashType::Md5);
    // feed it in awkward pieces to cross block boundaries
    for chunk in "a".repeat(1_000_000).as_bytes().chunks(997) {
        ctx.update(chunk);
    }
    assert_eq!(ctx.get_string()?, "7707d6ae4e027c70eea2a935c2296f21");
    Ok(())
}

#[test]
fn million_a_sha1() -> Result<()> {
    let mut ctx = HashContext::new(HashType::Sha1);
    for chunk in "a".repeat(1_000_000).as_bytes().chunks(1000) {
        ctx.update(chunk);
    }
    assert_eq!(ctx.get_string()?, "34aa973cd4c4daa4f61eeb2bdbad27316534016f");
    Ok(())
}

#[cfg(feature = "long_tests")]
#[test]
fn million_a_gost() -> Result<()> {
    let mut ctx = HashContext::new(HashType::Gost);
    for chunk in "a".repeat(1_000_000).as_bytes().chunks(1000) {
        ctx.update(chunk);
    }
    assert_eq!(
        ctx.get_string()?,
        "5c00ccc2734cdd3332d3d4749576e3c1a7dbaf0e7ea74e9fa602413c90a129fa"
    );
    Ok(())
}

#[cfg(feature = "long_tests")]
#[test]
fn gigabyte_sha1() -> Result<()> {
    let mut ctx = HashContext::new(HashType::Sha1);
    let chunk = b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmno";
    for _ in 0..16_777_216 {
        ctx.update(chunk);
    }
    assert_eq!(ctx.get_string()?, "7789f0c9ef7bfc40d93311143dfbe69e2017f592");
    Ok(())
}

#[test]
fn gost_standard_examples() {
    assert_eq!(
        hash_hex(HashType::Gost, "This is message, length=32 bytes"),
        "b1c466d37519b82e8319819ff32595e047a28cb6f83eff1c6916a815a637fffa"
    );
    assert_eq!(
        hash_hex(
            HashType::Gost,
            "Suppose the original message has length = 50 bytes"
        ),
        "471aba57a60a770d3a76130635c1fbea4ef14de51f78b4ae57dd893b62f55208"
    );
}

#[test]
fn gost_param_sets_differ() {
    let mut test = HashContext::new(HashType::Gost);
    let mut crypto_pro = HashContext::with_gost_params(GostParams::CryptoPro);
    test.update("abc");
    crypto_pro.update("abc");
    assert_ne!(test.digest(), crypto_pro.digest());
    assert_eq!(
        crypto_pro.digest().as_bytes(),
        hex!("b285056dbf18d7392d7677369524dd14747459ed8143997e163b2986f92fd42c")
    );
}
