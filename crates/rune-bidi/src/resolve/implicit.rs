//! Implicit levels (I1-I2).

use crate::class::BidiClass;
use crate::resolve::runs::RunContext;

pub(crate) fn resolve_implicit(ctx: &mut RunContext<'_>) {
    for i in ctx.range() {
        let class = ctx.class_at(i);
        let record = ctx.record_mut(i);
        record.level += implicit_raise(class, record.level);
    }
}

fn implicit_raise(class: BidiClass, level: u8) -> u8 {
    let odd = level & 1 == 1;
    match class {
        BidiClass::L if odd => 1,
        BidiClass::R if !odd => 1,
        BidiClass::AN | BidiClass::EN if odd => 1,
        BidiClass::AN | BidiClass::EN => 2,
        _ => 0,
    }
}
