// ============================================================================
// tests/integration_test.rs - デコーダ統合テスト
// ============================================================================

use ps2_scancode::ps2::scancode::{set2, set2_extended};
use ps2_scancode::ps2::{PrefixState, codes};
use ps2_scancode::{KeyEvent, KeyIdentity, KeyboardDecoder, Modifiers, Namespace};

/// 全バイトを流して生成されたイベントを集める
fn feed(decoder: &mut KeyboardDecoder, bytes: &[u8]) -> Vec<Option<KeyEvent>> {
    bytes.iter().map(|&raw| decoder.consume(raw)).collect()
}

// ============================================================================
// シナリオ
// ============================================================================

#[test]
fn test_shift_then_letter() {
    let mut decoder = KeyboardDecoder::new();
    let events = feed(&mut decoder, &[set2::LEFT_SHIFT, set2::A]);
    assert_eq!(
        events,
        vec![None, Some(KeyEvent::new(KeyIdentity::A, Modifiers::SHIFT))]
    );
    assert_eq!(events[1].unwrap().to_raw(), 0x4041);
}

#[test]
fn test_shift_released_before_letter() {
    let mut decoder = KeyboardDecoder::new();
    let events = feed(
        &mut decoder,
        &[set2::LEFT_SHIFT, codes::UNMAKE, set2::LEFT_SHIFT, set2::A],
    );
    assert_eq!(
        events,
        vec![
            None,
            None,
            None,
            Some(KeyEvent::new(KeyIdentity::A, Modifiers::empty()))
        ]
    );
}

#[test]
fn test_unrecognized_byte_then_normal_key() {
    let mut decoder = KeyboardDecoder::new();
    assert_eq!(set2::resolve(0x02), None);
    assert_eq!(decoder.consume(0x02), None);
    assert_eq!(decoder.prefix(), PrefixState::Idle);
    assert_eq!(
        decoder.consume(set2::S),
        Some(KeyEvent::new(KeyIdentity::S, Modifiers::empty()))
    );
}

#[test]
fn test_full_pause_make_sequence() {
    // Pause は離した状態を持たず、押下時に8バイトまとめて送られる
    let mut decoder = KeyboardDecoder::new();
    let bytes = [0xE1, 0x14, 0x77, 0xE1, 0xF0, 0x14, 0xF0, 0x77];
    let events: Vec<KeyEvent> = decoder.decode(bytes).collect();
    assert_eq!(
        events,
        vec![KeyEvent::new(KeyIdentity::Break, Modifiers::empty())]
    );
    assert_eq!(decoder.prefix(), PrefixState::Idle);
}

#[test]
fn test_print_screen_fake_shift_is_ignored() {
    // E0 12 E0 7C / E0 F0 7C E0 F0 12
    let mut decoder = KeyboardDecoder::new();
    let events: Vec<KeyEvent> = decoder
        .decode([0xE0, 0x12, 0xE0, 0x7C, 0xE0, 0xF0, 0x7C, 0xE0, 0xF0, 0x12])
        .collect();
    assert_eq!(
        events,
        vec![KeyEvent::new(KeyIdentity::PrintScreen, Modifiers::empty())]
    );
    assert_eq!(decoder.modifiers(), Modifiers::empty());
}

#[test]
fn test_ctrl_alt_delete() {
    let mut decoder = KeyboardDecoder::new();
    let bytes = [
        set2::LEFT_CTRL,
        codes::EXTEND,
        set2_extended::RIGHT_ALT,
        codes::EXTEND,
        set2_extended::DELETE,
    ];
    let events: Vec<KeyEvent> = decoder.decode(bytes).collect();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].key(), KeyIdentity::Delete);
    assert!(events[0].ctrl() && events[0].alt());
    assert!(!events[0].shift() && !events[0].gui());
}

#[test]
fn test_typematic_repeat() {
    // 押しっぱなしでは同じ押下コードが繰り返される
    let mut decoder = KeyboardDecoder::new();
    let bytes = [set2::K, set2::K, set2::K, codes::UNMAKE, set2::K];
    assert_eq!(decoder.decode(bytes).count(), 3);
}

#[test]
fn test_doubled_prefix_self_heals() {
    let mut decoder = KeyboardDecoder::new();
    let events = feed(
        &mut decoder,
        &[codes::EXTEND, codes::EXTEND, set2_extended::UP_ARROW, set2::KEYPAD_8],
    );
    assert_eq!(events[2].map(|e| e.key()), Some(KeyIdentity::UpArrow));
    assert_eq!(events[3].map(|e| e.key()), Some(KeyIdentity::Keypad8));
}

// ============================================================================
// 性質
// ============================================================================

#[test]
fn test_every_baseline_key_resolves() {
    let modifier_states = [
        Modifiers::empty(),
        Modifiers::SHIFT,
        Modifiers::CTRL | Modifiers::ALT,
    ];
    for held in modifier_states {
        for &(raw, key) in Namespace::Set2.entries() {
            if key.is_modifier() {
                continue;
            }
            let mut decoder = KeyboardDecoder::new();
            if held.shift() {
                decoder.consume(set2::LEFT_SHIFT);
            }
            if held.ctrl() {
                decoder.consume(set2::LEFT_CTRL);
            }
            if held.alt() {
                decoder.consume(set2::LEFT_ALT);
            }
            assert_eq!(
                decoder.consume(raw),
                Some(KeyEvent::new(key, held)),
                "raw {:#04x}",
                raw
            );
        }
    }
}

#[test]
fn test_every_extended_key_resolves() {
    for &(raw, key) in Namespace::Set2Extended.entries() {
        let mut decoder = KeyboardDecoder::new();
        decoder.consume(codes::EXTEND);
        let event = decoder.consume(raw);
        if key.is_modifier() {
            assert_eq!(event, None);
            assert_eq!(decoder.modifiers(), key.modifier().unwrap());
        } else {
            assert_eq!(event, Some(KeyEvent::new(key, Modifiers::empty())));
        }
    }
}

#[test]
fn test_modifier_pairs_leave_mask_unchanged() {
    let modifier_codes: Vec<(Namespace, u8)> = [Namespace::Set2, Namespace::Set2Extended]
        .into_iter()
        .flat_map(|ns| {
            ns.entries()
                .iter()
                .filter(|(_, key)| key.is_modifier())
                .map(move |&(raw, _)| (ns, raw))
        })
        .collect();
    assert_eq!(modifier_codes.len(), 8);

    for &(ns, raw) in &modifier_codes {
        let bit = ns.resolve(raw).and_then(|k| k.modifier()).unwrap();
        let mut decoder = KeyboardDecoder::new();
        // 別の修飾キーを押した状態から始める
        let held = if bit == Modifiers::SHIFT { set2::LEFT_CTRL } else { set2::LEFT_SHIFT };
        decoder.consume(held);
        let before = decoder.modifiers();

        let prefix: &[u8] = if ns == Namespace::Set2Extended {
            &[codes::EXTEND]
        } else {
            &[]
        };
        let mut sequence = prefix.to_vec();
        sequence.push(raw);
        sequence.extend_from_slice(prefix);
        sequence.push(codes::UNMAKE);
        sequence.push(raw);

        let events = feed(&mut decoder, &sequence);
        assert!(events.iter().all(Option::is_none));
        assert_eq!(decoder.modifiers(), before, "{:?} {:#04x}", ns, raw);
    }
}

#[test]
fn test_left_and_right_share_modifier_bit() {
    // 左右の区別はないので、片方の解放でビットが落ちる
    let mut decoder = KeyboardDecoder::new();
    feed(
        &mut decoder,
        &[set2::LEFT_SHIFT, set2::RIGHT_SHIFT, codes::UNMAKE, set2::RIGHT_SHIFT],
    );
    assert_eq!(decoder.modifiers(), Modifiers::empty());
}

#[test]
fn test_release_prefix_before_pause_suppresses_event() {
    let mut decoder = KeyboardDecoder::new();
    let events = feed(&mut decoder, &[codes::UNMAKE, codes::EXTEND1, 0x14, 0x77]);
    assert!(events.iter().all(Option::is_none));
}
