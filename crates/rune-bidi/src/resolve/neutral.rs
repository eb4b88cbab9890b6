//! Neutral type resolution (N1-N2), applied to one level run.

use crate::class::BidiClass;
use crate::resolve::runs::RunContext;

pub(crate) fn resolve_neutral(ctx: &mut RunContext<'_>) {
    resolve_bounded_neutrals(ctx);
    resolve_remaining_by_level(ctx);
    resolve_other_neutrals(ctx);
}

fn is_rtl_context(class: BidiClass) -> bool {
    matches!(class, BidiClass::R | BidiClass::AN | BidiClass::EN)
}

// N1: a neutral sequence takes the direction of matching neighbors.
// Numbers count as right-to-left here.
fn resolve_bounded_neutrals(ctx: &mut RunContext<'_>) {
    let range = ctx.range();
    let mut i = range.start;
    while i < range.end {
        if !ctx.class_at(i).is_neutral() {
            i += 1;
            continue;
        }
        let end = ctx.span_end(i, BidiClass::is_neutral);
        let before = ctx.class_before(i);
        let after = ctx.class_at(end);
        let resolved = if before == BidiClass::L && after == BidiClass::L {
            Some(BidiClass::L)
        } else if is_rtl_context(before) && is_rtl_context(after) {
            Some(BidiClass::R)
        } else {
            None
        };
        if let Some(class) = resolved {
            for j in i..end {
                ctx.set_class(j, class);
            }
        }
        i = end;
    }
}

// N2 for separators and whitespace.
fn resolve_remaining_by_level(ctx: &mut RunContext<'_>) {
    for i in ctx.range() {
        if matches!(
            ctx.class_at(i),
            BidiClass::B | BidiClass::S | BidiClass::WS
        ) {
            let level = ctx.record(i).level;
            ctx.set_class(i, BidiClass::for_level(level));
        }
    }
}

// Other neutrals caught between opposite directions follow the text on
// their left.
fn resolve_other_neutrals(ctx: &mut RunContext<'_>) {
    let range = ctx.range();
    let mut i = range.start;
    while i < range.end {
        if ctx.class_at(i) != BidiClass::ON {
            i += 1;
            continue;
        }
        let end = ctx.span_end(i, |class| class == BidiClass::ON);
        let before = ctx.class_before(i);
        let after = ctx.class_at(end);
        let resolved = match (before, after) {
            (BidiClass::R, BidiClass::L) => Some(BidiClass::R),
            (BidiClass::L, BidiClass::R) => Some(BidiClass::L),
            _ => None,
        };
        if let Some(class) = resolved {
            for j in i..end {
                ctx.set_class(j, class);
            }
        }
        i = end;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::CharRecord;
    use crate::resolve::runs::LevelRun;
    use crate::class::BidiClass::*;

    fn run_neutral(classes: &[BidiClass], level: u8, sor: BidiClass, eor: BidiClass) -> Vec<BidiClass> {
        let mut recs: Vec<CharRecord> = classes
            .iter()
            .map(|&c| {
                let mut r = CharRecord::new('x', c);
                r.level = level;
                r
            })
            .collect();
        let run = LevelRun {
            range: 0..recs.len(),
            level,
            sor,
            eor,
        };
        let mut ctx = RunContext::new(&mut recs, &run);
        resolve_neutral(&mut ctx);
        recs.iter().map(|r| r.class).collect()
    }

    #[test]
    fn neutrals_between_matching_strong_types() {
        assert_eq!(run_neutral(&[L, WS, ON, L], 1, R, R), vec![L, L, L, L]);
        assert_eq!(run_neutral(&[R, WS, R], 0, L, L), vec![R, R, R]);
    }

    #[test]
    fn numbers_count_as_right_to_left() {
        assert_eq!(run_neutral(&[R, ON, AN], 0, L, L), vec![R, R, AN]);
        assert_eq!(run_neutral(&[EN, WS, EN], 0, L, L), vec![EN, R, EN]);
        assert_eq!(run_neutral(&[AN, ON, R], 0, L, L), vec![AN, R, R]);
    }

    #[test]
    fn run_edges_use_sentinels() {
        assert_eq!(run_neutral(&[ON, R], 0, R, L), vec![R, R]);
        assert_eq!(run_neutral(&[L, ON], 1, R, L), vec![L, L]);
    }

    #[test]
    fn leftover_whitespace_follows_level_parity() {
        assert_eq!(run_neutral(&[L, WS, R], 1, R, R), vec![L, R, R]);
        assert_eq!(run_neutral(&[L, S, R], 0, R, R), vec![L, L, R]);
    }

    #[test]
    fn other_neutrals_between_opposite_directions_take_left() {
        assert_eq!(run_neutral(&[R, ON, ON, L], 0, L, L), vec![R, R, R, L]);
        assert_eq!(run_neutral(&[L, ON, R], 1, R, R), vec![L, L, R]);
    }

    #[test]
    fn unresolvable_other_neutral_is_left_alone() {
        assert_eq!(run_neutral(&[EN, ON, L], 0, L, L), vec![EN, ON, L]);
    }
}
