//! Weak type resolution (W1-W7), applied to one level run.

use crate::class::BidiClass;
use crate::resolve::runs::RunContext;

pub(crate) fn resolve_weak(ctx: &mut RunContext<'_>) {
    resolve_nsm(ctx);
    resolve_european_after_arabic(ctx);
    resolve_arabic_letters(ctx);
    resolve_separators(ctx);
    resolve_terminators(ctx);
    resolve_leftover_separators(ctx);
    resolve_european_after_ltr(ctx);
}

// W1
fn resolve_nsm(ctx: &mut RunContext<'_>) {
    for i in ctx.range() {
        if ctx.class_at(i) == BidiClass::NSM {
            let prev = ctx.class_before(i);
            ctx.set_class(i, prev);
        }
    }
}

// W2
fn resolve_european_after_arabic(ctx: &mut RunContext<'_>) {
    for i in ctx.range() {
        if ctx.class_at(i) != BidiClass::EN {
            continue;
        }
        let preceding = ctx.range().start..i;
        let strong = preceding
            .rev()
            .map(|j| ctx.class_at(j))
            .find(|class| class.is_strong())
            .unwrap_or(ctx.sor());
        if strong == BidiClass::AL {
            ctx.set_class(i, BidiClass::AL);
        }
    }
}

// W3
fn resolve_arabic_letters(ctx: &mut RunContext<'_>) {
    for i in ctx.range() {
        if ctx.class_at(i) == BidiClass::AL {
            ctx.set_class(i, BidiClass::R);
        }
    }
}

// W4
fn resolve_separators(ctx: &mut RunContext<'_>) {
    let range = ctx.range();
    for i in range.start + 1..range.end.saturating_sub(1) {
        let prev = ctx.class_at(i - 1);
        let next = ctx.class_at(i + 1);
        match ctx.class_at(i) {
            BidiClass::ES | BidiClass::CS
                if prev == BidiClass::EN && next == BidiClass::EN =>
            {
                ctx.set_class(i, BidiClass::EN);
            }
            BidiClass::CS if prev == BidiClass::AN && next == BidiClass::AN => {
                ctx.set_class(i, BidiClass::AN);
            }
            _ => {}
        }
    }
}

// W5: terminators can sit on either side of the number, so sweep both ways.
fn resolve_terminators(ctx: &mut RunContext<'_>) {
    let range = ctx.range();
    for i in range.start + 1..range.end {
        if ctx.class_at(i) == BidiClass::ET && ctx.class_at(i - 1) == BidiClass::EN {
            ctx.set_class(i, BidiClass::EN);
        }
    }
    for i in (range.start..range.end.saturating_sub(1)).rev() {
        if ctx.class_at(i) == BidiClass::ET && ctx.class_at(i + 1) == BidiClass::EN {
            ctx.set_class(i, BidiClass::EN);
        }
    }
}

// W6
fn resolve_leftover_separators(ctx: &mut RunContext<'_>) {
    for i in ctx.range() {
        match ctx.class_at(i) {
            BidiClass::ET
                if ctx.class_before(i) == BidiClass::AN
                    || ctx.class_at(i + 1) == BidiClass::AN =>
            {
                ctx.set_class(i, BidiClass::ON);
            }
            BidiClass::ES | BidiClass::CS => ctx.set_class(i, BidiClass::ON),
            _ => {}
        }
    }
}

// W7
fn resolve_european_after_ltr(ctx: &mut RunContext<'_>) {
    for i in ctx.range() {
        if ctx.class_at(i) != BidiClass::EN {
            continue;
        }
        let preceding = ctx.range().start..i;
        let first = preceding
            .rev()
            .map(|j| ctx.class_at(j))
            .find(|class| !class.is_neutral())
            .unwrap_or(ctx.sor());
        if first == BidiClass::L {
            ctx.set_class(i, BidiClass::L);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::CharRecord;
    use crate::resolve::runs::LevelRun;
    use crate::class::BidiClass::*;

    fn run_weak(classes: &[BidiClass], sor: BidiClass, eor: BidiClass) -> Vec<BidiClass> {
        let mut recs: Vec<CharRecord> = classes.iter().map(|&c| CharRecord::new('x', c)).collect();
        let run = LevelRun {
            range: 0..recs.len(),
            level: 0,
            sor,
            eor,
        };
        let mut ctx = RunContext::new(&mut recs, &run);
        resolve_weak(&mut ctx);
        recs.iter().map(|r| r.class).collect()
    }

    #[test]
    fn nsm_inherits_previous_or_sor() {
        assert_eq!(run_weak(&[NSM, L, NSM, NSM], R, R), vec![R, L, L, L]);
    }

    #[test]
    fn nsm_after_arabic_letter_becomes_right_to_left() {
        // W1 makes the mark AL, W3 then turns both into R.
        assert_eq!(run_weak(&[AL, NSM], L, L), vec![R, R]);
    }

    #[test]
    fn european_number_after_arabic_letter() {
        // EN behind AL becomes AL, then R via W3.
        assert_eq!(run_weak(&[AL, WS, EN], L, L), vec![R, WS, R]);
        assert_eq!(run_weak(&[AL, L, EN], R, R), vec![R, L, L]);
    }

    #[test]
    fn separators_between_numbers() {
        assert_eq!(run_weak(&[R, EN, ES, EN], R, R), vec![R, EN, EN, EN]);
        assert_eq!(run_weak(&[R, EN, CS, EN], R, R), vec![R, EN, EN, EN]);
        assert_eq!(run_weak(&[R, AN, CS, AN], R, R), vec![R, AN, AN, AN]);
        assert_eq!(run_weak(&[R, AN, ES, AN], R, R), vec![R, AN, ON, AN]);
    }

    #[test]
    fn terminators_join_adjacent_numbers() {
        assert_eq!(run_weak(&[R, ET, ET, EN], R, R), vec![R, EN, EN, EN]);
        assert_eq!(run_weak(&[R, EN, ET, ET], R, R), vec![R, EN, EN, EN]);
        assert_eq!(run_weak(&[R, AN, ET, EN], R, R), vec![R, AN, EN, EN]);
    }

    #[test]
    fn terminators_next_to_arabic_numbers_become_neutral() {
        assert_eq!(run_weak(&[R, AN, ET], R, R), vec![R, AN, ON]);
        assert_eq!(run_weak(&[R, ET, AN], R, R), vec![R, ON, AN]);
    }

    #[test]
    fn leftover_separators_become_neutral() {
        assert_eq!(run_weak(&[R, CS, R], R, R), vec![R, ON, R]);
        assert_eq!(run_weak(&[R, EN, CS, AN], R, R), vec![R, EN, ON, AN]);
    }

    #[test]
    fn european_number_after_ltr_becomes_ltr() {
        assert_eq!(run_weak(&[L, WS, EN], L, L), vec![L, WS, L]);
        assert_eq!(run_weak(&[R, WS, EN], L, L), vec![R, WS, EN]);
        assert_eq!(run_weak(&[EN, EN], L, L), vec![L, L]);
        assert_eq!(run_weak(&[EN], R, R), vec![EN]);
    }
}
