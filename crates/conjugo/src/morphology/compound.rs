//! Compound paradigms derived from their base verb.

use crate::morphology::assimilation::prefix_phrase;
use crate::types::{Form, Paradigm};

/// Prefix every alternate of every form of `base`.
///
/// Only the first word of an alternate takes the prefix, so periphrastic
/// helpers stay intact. Placeholders are left alone.
pub fn prefix_paradigm(base: &Paradigm, prefix: &str) -> Paradigm {
    let mut paradigm = base.clone();
    paradigm.visit_forms_mut(&mut |form: &mut Form| {
        *form = form.map_alternates(|alternate| prefix_phrase(prefix, alternate));
    });
    paradigm
}
