//! Console easter egg: ASCII shower man plus a `singAlong()` performance.
//!
//! Lyric lines are stored base64-encoded (just obfuscation, not secrecy) and
//! decoded lazily when logged, one line per second. Each performance picks a
//! random set.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use rand::Rng;

pub static SHOWER_ART: &str = r#"
╔═══════════════════════════╗
║  🚿 SHOWER SURPRISE! 🚿   ║
╚═══════════════════════════╝

   .-"``"-.
  /        \
 |  ( ^  ^) |  ♪ la la la ♪
 |    ∆     |
  \  \__/  /
   `------'
     /||\
    / || \
     /  \
    (    )
     `--`
"#;

pub static SHOWER_DIALOGUE: &str = "\"Oh! I didn't see you there!\"";
pub static SHOWER_OFFER: &str = "\"Would you like me to sing for you?\"";
pub static SING_HINT: &str = "💡 Type: singAlong() to start the musical performance!";
pub static SING_INTRO: &str = "🎵 Starting musical performance... 🎵";

/// Base64-encoded lyric sets; each inner slice is one performance.
pub static LYRIC_SETS: &[&[&str]] = &[
    &[
        "R29ubmEgZmluZCBteSBiYWJ5LCBnb25uYSBob2xkIGhlciB0aWdodA==",
        "R29ubmEgZ3JhYiBzb21lIGFmdGVybm9vbiBkZWxpZ2h0",
        "TXkgbW90dG8ncyBhbHdheXMgYmVlbiAiV2hlbiBpdCdzIHJpZ2h0LCBpdCdzIHJpZ2h0Ig==",
        "V2h5IHdhaXQgdW50aWwgdGhlIG1pZGRsZSBvZiBhIGNvbGQgZGFyayBuaWdodD8=",
        "V2hlbiBldmVyeXRoaW5nJ3MgYSBsaXR0bGUgY2xlYXJlciBpbiB0aGUgbGlnaHQgb2YgZGF5",
        "QW5kIHdlIGtub3cgdGhlIG5pZ2h0IGlzIGFsd2F5cyBnb25uYSBiZSB0aGVyZSBhbnl3YXk=",
        "Li4uIHRoYXQncyBhbGwgdGhlIHNpbmdpbmcgSSBjYW4gZG8sIHdpdGhvdXQgcG9zc2libHkgYmVpbmcgc3VlZCBieSBjb3B5cmlnaHQgbGF3cy4uLm1heWJlIEkndmUgc2FpZCB0b28gbXVjaCBhbHJlYWR5Lg==",
    ],
    &[
        "V2hlbiB0aGUgbW9vbiBoaXRzIHlvdXIgZXll",
        "TGlrZSBhIGJpZyBwaXp6YSBwaWUsIHRoYXQncyBhbW9yZQ==",
        "V2hlbiB0aGUgd29ybGQgc2VlbXMgdG8gc2hpbmU=",
        "TGlrZSB5b3UndmUgaGFkIHRvbyBtdWNoIHdpbmUsIHRoYXQncyBhbW9yZQ==",
        "Li4uYW5kIHRoYXQncyBhcyBmYXIgYXMgSSBjYW4gZ28gYmVmb3JlIG15IGxhd3llciBzdGFydHMgY2xlYXJpbmcgdGhlaXIgdGhyb2F0Lg==",
    ],
    &[
        "SXQncyBidXNpbmVzcywgaXQncyBidXNpbmVzcyB0aW1l",
        "KFlvdSBrbm93IHdoZW4gSSdtIGRvd24gdG8gbXkgc29ja3MgaXQncyB0aW1lIGZvciBidXNpbmVzcw==",
        "VGhhdCdzIHdoeSB0aGV5IGNhbGwgaXQgYnVzaW5lc3Mgc29ja3MsIG9vaCk=",
        "SXQncyBidXNpbmVzcywgaXQncyBidXNpbmVzcyB0aW1l",
        "KE9oLCBvaC1vaCwgb2gtb2gtb2gsIHllYWgteWVhaCwgeWVhaC15ZWFoKQ==",
        "Li4uaWYgSSBnbyBvbmUgbm90ZSBmdXJ0aGVyLCBJJ2xsIHByb2JhYmx5IG93ZSByb3lhbHRpZXMu",
    ],
];

/// Decode one lyric line; falls back to the raw text if the encoding is bad.
pub fn decode_lyric(line: &str) -> String {
    STANDARD
        .decode(line)
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
        .unwrap_or_else(|| line.to_owned())
}

/// Pick one lyric set for a performance.
pub fn pick_lyric_set(rng: &mut impl Rng) -> &'static [&'static str] {
    *crate::phrases::pick(LYRIC_SETS, rng)
}
