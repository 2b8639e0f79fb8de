// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Exception policy behavior as observed through `SafeValue`.
//!
//! `LogAndContinue` events are captured with a `tracing-subscriber` fmt layer
//! writing into a shared buffer.

use bulwark::{
    domain::{Full, Ranged},
    error::{ErrorKind, SafeNumericError},
    policy::{
        exception::{LogAndContinue, Unwind},
        promotion::{Automatic, Native},
    },
    value::SafeValue,
};
use std::{
    io,
    panic::catch_unwind,
    sync::{Arc, Mutex},
};

type Logged<T> = SafeValue<T, Full, Native, LogAndContinue>;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        let buffer = self.0.lock().unwrap();
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` with a subscriber that records every event, returning the log.
fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, String) {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, captured.contents())
}

#[test]
fn test_log_and_continue_construction_warns() {
    let (value, log) = capture_logs(|| Logged::<u8>::new(-1i32));
    assert_eq!(value.get(), 255);
    assert!(log.contains("WARN"), "{log}");
    assert!(log.contains("kind=range"), "{log}");
    assert!(log.contains("Invalid value"), "{log}");
}

#[test]
fn test_log_and_continue_assignment_is_not_committed() {
    let (value, log) = capture_logs(|| {
        let mut x = Logged::<u32>::new(4_294_967_295u64);
        x.assign(4_294_967_296u64);
        x
    });
    assert_eq!(value.get(), u32::MAX);
    assert!(log.contains("Invalid value passed on assignment"), "{log}");
}

#[test]
fn test_log_and_continue_compound_assignment_is_not_committed() {
    let (value, log) = capture_logs(|| {
        let mut x = Logged::<u8>::new(250u8);
        x += 10u8;
        x *= 2u8;
        x
    });
    assert_eq!(value.get(), 250);
    assert!(log.contains("kind=overflow"), "{log}");
    assert!(log.contains("Overflow on addition"), "{log}");
    assert!(log.contains("Overflow on multiplication"), "{log}");
}

#[test]
fn test_log_and_continue_binary_operator_yields_left_operand() {
    let (value, log) = capture_logs(|| Logged::<i8>::new(100i8) + 100i8);
    assert_eq!(value.get(), 100);
    assert_eq!(log.matches("WARN").count(), 1, "{log}");
}

#[test]
fn test_log_and_continue_increments() {
    let ((before, after), log) = capture_logs(|| {
        let mut x = Logged::<i8>::new(127i8);
        let before = x.post_increment();
        x.pre_increment();
        (before, x)
    });
    assert_eq!(before.get(), 127);
    assert_eq!(after.get(), 127);
    assert!(log.contains("Overflow on increment"), "{log}");
    assert_eq!(log.matches("WARN").count(), 2, "{log}");
}

#[test]
fn test_log_and_continue_unary_operators() {
    let ((negated, complemented), log) = capture_logs(|| {
        let min = Logged::<i8>::new(i8::MIN);
        let ranged = SafeValue::<i8, Ranged<0, 10>, Native, LogAndContinue>::new(3i8);
        (-min, !ranged)
    });
    assert_eq!(negated.get(), i8::MIN);
    assert_eq!(complemented.get(), 3);
    assert!(log.contains("Overflow on subtraction"), "{log}");
    assert!(log.contains("Overflow on bitwise complement"), "{log}");
}

#[test]
fn test_valid_operations_emit_nothing() {
    let (value, log) = capture_logs(|| {
        let mut x = SafeValue::<i16, Full, Automatic, LogAndContinue>::new(-3i8);
        x *= 1000u16;
        x -= 2u8;
        x
    });
    assert_eq!(value.get(), -3002);
    assert!(log.is_empty(), "{log}");
}

#[test]
fn test_unwind_assignment_payload() {
    let caught = catch_unwind(|| {
        let mut x = SafeValue::<u32, Full, Native, Unwind>::new(0u8);
        x.assign(-1i64);
    })
    .unwrap_err();
    let error = caught.downcast_ref::<SafeNumericError>().copied();
    assert_eq!(
        error,
        Some(SafeNumericError::Range("Invalid value passed on assignment"))
    );
    assert_eq!(error.map(|e| e.kind()), Some(ErrorKind::Range));
}

#[test]
fn test_unwind_logs_before_unwinding() {
    let (caught, log) = capture_logs(|| {
        catch_unwind(|| SafeValue::<u8>::new(300u16)).err()
    });
    let payload = caught.and_then(|p| p.downcast_ref::<SafeNumericError>().copied());
    assert_eq!(payload, Some(SafeNumericError::Range("Invalid value")));
    assert!(log.contains("ERROR"), "{log}");
    assert!(log.contains("kind=range"), "{log}");
    assert!(log.contains("Invalid value"), "{log}");
}

#[test]
fn test_unwind_prefix_increment_never_wraps() {
    let caught = catch_unwind(|| {
        let mut x = SafeValue::<i8>::new(127i8);
        x.pre_increment()
    });
    let payload = caught.err().and_then(|p| p.downcast_ref::<SafeNumericError>().copied());
    assert_eq!(payload.map(|e| e.kind()), Some(ErrorKind::Overflow));
}
