//! Blocking fades: step order, terminal write, timing and masks.

use super::mock_hw::{BLUE_PIN, GREEN_PIN, HwCall, RED_PIN, mock_led};
use rgbled::{Channel, ChannelMask};

#[test]
fn equal_bounds_write_once_after_one_delay() {
    let (board, mut led) = mock_led();
    led.fade_channels(Channel::Red | Channel::Green, 10, 10, 5);

    assert_eq!(
        board.calls(),
        vec![
            HwCall::Delay { ms: 5 },
            HwCall::Write { pin: RED_PIN, value: 10 },
            HwCall::Write { pin: GREEN_PIN, value: 10 },
        ]
    );
    assert_eq!(board.total_delay_ms(), 5);
    assert_eq!(led.intensity(Channel::Red), 10);
    assert_eq!(led.intensity(Channel::Green), 10);
}

#[test]
fn full_range_up_reaches_255() {
    let (board, mut led) = mock_led();
    led.fade_channel(Channel::Red, 0, 255, 1);

    let expected: Vec<u8> = (0..=255).collect();
    assert_eq!(board.writes_to(RED_PIN), expected);
    assert_eq!(board.total_delay_ms(), 256);
    assert_eq!(led.intensity(Channel::Red), 255);
}

#[test]
fn full_range_down_reaches_0() {
    let (board, mut led) = mock_led();
    led.set_intensity(Channel::Red, 255);
    board.clear();
    led.fade_channel(Channel::Red, 255, 0, 1);

    let expected: Vec<u8> = (0..=255).rev().collect();
    assert_eq!(board.writes_to(RED_PIN), expected);
    assert_eq!(board.total_delay_ms(), 256);
    assert_eq!(led.intensity(Channel::Red), 0);
}

#[test]
fn each_step_is_written_then_waited() {
    let (board, mut led) = mock_led();
    led.fade_channel(Channel::Blue, 2, 4, 3);

    assert_eq!(
        board.calls(),
        vec![
            HwCall::Write { pin: BLUE_PIN, value: 2 },
            HwCall::Delay { ms: 3 },
            HwCall::Write { pin: BLUE_PIN, value: 3 },
            HwCall::Delay { ms: 3 },
            HwCall::Delay { ms: 3 },
            HwCall::Write { pin: BLUE_PIN, value: 4 },
        ]
    );
}

#[test]
fn final_value_written_exactly_once_at_end() {
    let (board, mut led) = mock_led();
    led.fade_channel(Channel::Green, 40, 30, 1);

    let writes = board.writes_to(GREEN_PIN);
    assert_eq!(writes.iter().filter(|v| **v == 30).count(), 1);
    assert_eq!(writes.last(), Some(&30));
    assert_eq!(writes.len(), 11);
}

#[test]
fn zero_delay_uses_current_default() {
    let (board, mut led) = mock_led();
    led.fade_channel(Channel::Red, 0, 9, 0);
    let with_default = board.total_delay_ms();
    assert_eq!(with_default, 10 * 5);

    board.clear();
    led.set_default_delay(12);
    led.fade_channel(Channel::Red, 0, 9, 0);
    assert_eq!(board.total_delay_ms(), 10 * 12);
    assert!(
        board
            .calls()
            .iter()
            .all(|c| !matches!(c, HwCall::Delay { ms } if *ms != 12))
    );
}

#[test]
fn stored_zero_default_degenerates_to_no_wait() {
    let (board, mut led) = mock_led();
    led.set_default_delay(0);
    led.fade_channel(Channel::Red, 0, 3, 0);

    assert_eq!(board.total_delay_ms(), 0);
    assert_eq!(board.writes_to(RED_PIN), vec![0, 1, 2, 3]);
}

#[test]
fn masked_channels_move_in_lockstep() {
    let (board, mut led) = mock_led();
    led.set_intensity(Channel::Green, 77);
    board.clear();

    led.fade_channels(Channel::Red | Channel::Blue, 5, 8, 1);

    assert_eq!(
        board.writes(),
        vec![
            (RED_PIN, 5),
            (BLUE_PIN, 5),
            (RED_PIN, 6),
            (BLUE_PIN, 6),
            (RED_PIN, 7),
            (BLUE_PIN, 7),
            (RED_PIN, 8),
            (BLUE_PIN, 8),
        ]
    );
    assert!(board.writes_to(GREEN_PIN).is_empty());
    assert_eq!(led.intensity(Channel::Green), 77);
    assert_eq!(led.intensity(Channel::Red), 8);
    assert_eq!(led.intensity(Channel::Blue), 8);
}

#[test]
fn raw_mask_bits_are_truncated() {
    let (board, mut led) = mock_led();
    led.fade_channels(ChannelMask::from_bits_truncate(0b1111_1100), 0, 1, 1);

    assert!(board.writes_to(RED_PIN).is_empty());
    assert_eq!(board.writes_to(GREEN_PIN), vec![0, 1]);
    assert_eq!(board.writes_to(BLUE_PIN), vec![0, 1]);
}

#[test]
fn empty_mask_only_waits() {
    let (board, mut led) = mock_led();
    led.fade_channels(ChannelMask::NONE, 0, 4, 2);

    assert!(board.writes().is_empty());
    assert_eq!(board.total_delay_ms(), 10);
}

#[test]
fn fade_does_not_start_from_cached_value() {
    let (board, mut led) = mock_led();
    led.set_intensity(Channel::Red, 200);
    board.clear();
    led.fade_channel(Channel::Red, 0, 2, 1);
    assert_eq!(board.writes_to(RED_PIN), vec![0, 1, 2]);
}

#[test]
fn predicted_duration_matches_blocking_time() {
    let (board, mut led) = mock_led();
    for (from, to, delay) in [(0u8, 255u8, 1u16), (255, 0, 2), (10, 10, 5), (7, 3, 0)] {
        board.clear();
        let predicted = led.fade_duration_ms(from, to, delay);
        led.fade_channels(ChannelMask::ALL, from, to, delay);
        assert_eq!(board.total_delay_ms(), predicted, "fade {from} -> {to} @ {delay}ms");
    }
}
