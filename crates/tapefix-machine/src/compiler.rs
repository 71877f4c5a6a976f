// The alignment compiler: pair of strings in, machine diagram out

use crate::alignment::align;
use crate::graph::{FillColor, Graph, GraphBuilder, State, StateId, StateShape};
use crate::topology::Topology;
use crate::transition::{EdgeColor, EdgeStyle, Transition, TransitionKind};
use crate::{
    ACCEPT_LABEL, ACCEPT_STATE, HALT_LABEL, HALT_STATE, OUTPUT_EDGE_LABEL, OUTPUT_LABEL_PREFIX,
    OUTPUT_STATE, START_STATE,
};

/// Compile `(original, corrected)` with the default per-position topology.
///
/// See [`compile_with`].
pub fn compile(original: &str, corrected: &str) -> Graph {
    compile_with(original, corrected, Topology::default())
}

/// Compile `(original, corrected)` into a machine diagram.
///
/// Emits one content transition per aligned position (`max` of the two
/// character counts), then the accept edge, the dashed edge into the output
/// node labeled `"Corrected Word: " + corrected`, and the dashed halt edge.
/// The graph therefore always holds `positions + 3` transitions. Pure and
/// deterministic; two empty strings give `q0 -> q_accept -> corrected ->
/// q_halt`.
pub fn compile_with(original: &str, corrected: &str, topology: Topology) -> Graph {
    let mut builder = GraphBuilder::new();

    let mut current = StateId::new(START_STATE);
    builder.add_state(State::new(START_STATE, StateShape::Circle));

    for pair in align(original, corrected) {
        let class = pair.classification();
        let next = topology.state_for(&pair);
        builder.add_state(State::new(next.as_str(), StateShape::Circle));
        builder.add_transition(Transition {
            from: current,
            to: next.clone(),
            label: pair.label(),
            color: Some(class.color()),
            style: None,
            kind: TransitionKind::Content(class),
        });
        current = next;
    }

    builder.add_state(State::new(ACCEPT_STATE, StateShape::DoubleCircle));
    builder.add_transition(Transition {
        from: current,
        to: StateId::new(ACCEPT_STATE),
        label: ACCEPT_LABEL.to_string(),
        color: Some(EdgeColor::Purple),
        style: None,
        kind: TransitionKind::Accept,
    });

    builder.add_state(
        State::new(OUTPUT_STATE, StateShape::Box)
            .with_label(format!("{OUTPUT_LABEL_PREFIX}{corrected}"))
            .with_fill(FillColor::LightGrey),
    );
    builder.add_transition(Transition {
        from: StateId::new(ACCEPT_STATE),
        to: StateId::new(OUTPUT_STATE),
        label: OUTPUT_EDGE_LABEL.to_string(),
        color: None,
        style: Some(EdgeStyle::Dashed),
        kind: TransitionKind::Output,
    });

    builder.add_state(State::new(HALT_STATE, StateShape::DoubleCircle));
    builder.add_transition(Transition {
        from: StateId::new(OUTPUT_STATE),
        to: StateId::new(HALT_STATE),
        label: HALT_LABEL.to_string(),
        color: None,
        style: Some(EdgeStyle::Dashed),
        kind: TransitionKind::Halt,
    });

    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::Classification::{self, *};

    fn labels(g: &Graph) -> Vec<&str> {
        g.transitions().iter().map(|t| t.label.as_str()).collect()
    }

    fn edges(g: &Graph) -> Vec<(&str, &str)> {
        g.transitions()
            .iter()
            .map(|t| (t.from.as_str(), t.to.as_str()))
            .collect()
    }

    #[test]
    fn empty_pair_is_scaffold_only() {
        let g = compile("", "");
        assert_eq!(
            edges(&g),
            vec![
                ("q0", "q_accept"),
                ("q_accept", "corrected"),
                ("corrected", "q_halt"),
            ]
        );
        assert_eq!(g.output_label(), Some("Corrected Word: "));
        assert_eq!(g.states().len(), 4);
        assert!(g.classifications().is_empty());
    }

    #[test]
    fn cat_to_cot() {
        let g = compile("cat", "cot");
        assert_eq!(
            labels(&g),
            vec![
                "c/c,R (match)",
                "a/o,R (mismatch)",
                "t/t,R (match)",
                "B/B,R (accept)",
                "Output Corrected Word",
                "B/B,R (halt)",
            ]
        );
        assert_eq!(g.classifications(), vec![Match, Mismatch, Match]);
        assert_eq!(g.output_label(), Some("Corrected Word: cot"));
    }

    #[test]
    fn cat_to_cats() {
        let g = compile("cat", "cats");
        assert_eq!(g.classifications(), vec![Match, Match, Match, Insert]);
        assert_eq!(g.transitions()[3].label, "B/s,R (insert)");
        assert_eq!(g.transitions()[3].color, Some(EdgeColor::Blue));
        assert_eq!(g.transitions().len(), 7);
    }

    #[test]
    fn deletions_are_green() {
        let g = compile("cats", "cat");
        let last = g.content_transitions().last().unwrap();
        assert_eq!(last.label, "s/B,R (delete)");
        assert_eq!(last.color, Some(EdgeColor::Green));
    }

    #[test]
    fn per_position_chain_is_linear() {
        let g = compile("speling", "spelling");
        assert_eq!(g.states().len(), 8 + 4);
        assert_eq!(g.transitions().len(), 8 + 3);
        for pair in g.transitions().windows(2) {
            assert_eq!(pair[0].to, pair[1].from);
        }
        let ids: Vec<&str> = g.states().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids[0], "q0");
        assert_eq!(ids[1], "q1");
        assert_eq!(ids[8], "q8");
        assert_eq!(&ids[9..], &["q_accept", "corrected", "q_halt"]);
    }

    #[test]
    fn scaffold_styles() {
        let g = compile("a", "b");
        let t = g.transitions();
        assert_eq!(t[1].kind, TransitionKind::Accept);
        assert_eq!(t[1].color, Some(EdgeColor::Purple));
        assert!(!t[1].is_dashed());
        assert_eq!(t[2].kind, TransitionKind::Output);
        assert!(t[2].is_dashed());
        assert_eq!(t[3].kind, TransitionKind::Halt);
        assert!(t[3].is_dashed());

        let output = g.state(OUTPUT_STATE).unwrap();
        assert_eq!(output.shape, StateShape::Box);
        assert_eq!(output.fill, Some(FillColor::LightGrey));
        assert_eq!(g.state(ACCEPT_STATE).unwrap().shape, StateShape::DoubleCircle);
        assert_eq!(g.state(HALT_STATE).unwrap().shape, StateShape::DoubleCircle);
    }

    #[test]
    fn bucketed_reuses_states() {
        let g = compile_with("abcx", "abdxyz", Topology::Bucketed);
        assert_eq!(
            g.classifications(),
            vec![Match, Match, Mismatch, Match, Insert, Insert]
        );
        let ids: Vec<&str> = g.states().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "q0",
                "q_compare",
                "q_correct",
                "q_insert",
                "q_accept",
                "corrected",
                "q_halt",
            ]
        );
        assert_eq!(
            edges(&g)[..6],
            [
                ("q0", "q_compare"),
                ("q_compare", "q_compare"),
                ("q_compare", "q_correct"),
                ("q_correct", "q_compare"),
                ("q_compare", "q_insert"),
                ("q_insert", "q_insert"),
            ]
        );
        assert_eq!(edges(&g)[6], ("q_insert", "q_accept"));
    }

    #[test]
    fn topologies_share_labels() {
        let a = compile_with("recieve", "receive", Topology::PerPosition);
        let b = compile_with("recieve", "receive", Topology::Bucketed);
        assert_eq!(labels(&a), labels(&b));
        assert_eq!(a.classifications(), b.classifications());
    }

    #[test]
    fn compile_is_deterministic() {
        assert_eq!(compile("teh", "the"), compile("teh", "the"));
    }

    #[test]
    fn trailing_positions_never_mix() {
        let g = compile("ab", "abcde");
        let tail: Vec<Classification> = g.classifications()[2..].to_vec();
        assert_eq!(tail, vec![Insert; 3]);
    }
}
