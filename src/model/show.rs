//! Slideshow formulation
//!
//! Encodes slide selection and ordering over a candidate list:
//!
//! - `x[i]`: slide `i` appears in the show
//! - `y[i][j]`: slide `i` immediately precedes slide `j`
//! - `pos[i]`: integer position, used only to linearize "comes before"
//!
//! Constraints: each photo used at most once; at least one slide selected;
//! adjacency only between selected slides; at most one predecessor and one
//! successor per slide (forbids branching); big-M ordering
//! `pos[j] >= pos[i] + 1 - M*(1 - y[i][j])` with `M = n`. The objective
//! maximizes transition scores over realized adjacencies only; selected but
//! non-adjacent slides contribute nothing.

use std::collections::BTreeMap;

use super::{Direction, LinExpr, Model, ModelBuilder, Relation, VarId};
use crate::score::ScoreMatrix;
use crate::slides::Slide;

/// The frozen slideshow model: the generic [`Model`] plus the variable index
/// maps and candidate data needed to interpret a raw assignment
#[derive(Debug, Clone)]
pub struct ShowModel {
    model: Model,
    slides: Vec<Slide>,
    scores: ScoreMatrix,
    x: Vec<VarId>,
    y: Vec<Option<VarId>>,
    pos: Vec<VarId>,
}

impl ShowModel {
    /// Build the selection/adjacency/ordering model over the candidates.
    ///
    /// Takes ownership of the candidate list and score matrix; both are kept
    /// alongside the model for the extractor.
    #[must_use]
    pub fn formulate(slides: Vec<Slide>, scores: ScoreMatrix) -> Self {
        debug_assert_eq!(slides.len(), scores.len());
        let n = slides.len();
        let big_m = n as i64;
        let mut b = ModelBuilder::new();

        let x: Vec<VarId> = (0..n).map(|_| b.bool_var()).collect();
        let mut y: Vec<Option<VarId>> = vec![None; n * n];
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    y[i * n + j] = Some(b.bool_var());
                }
            }
        }
        let pos: Vec<VarId> = (0..n).map(|_| b.int_var(0, big_m - 1)).collect();

        // each photo appears in at most one selected slide
        let mut slides_by_photo: BTreeMap<u32, Vec<usize>> = BTreeMap::new();
        for (i, slide) in slides.iter().enumerate() {
            for &photo in slide.photo_ids() {
                slides_by_photo.entry(photo).or_default().push(i);
            }
        }
        for members in slides_by_photo.values() {
            let mut expr = LinExpr::new();
            for &i in members {
                expr = expr.term(x[i], 1);
            }
            b.add_constraint(expr, Relation::Le, 1);
        }

        // at least one slide in the show
        let mut any = LinExpr::new();
        for &xi in &x {
            any = any.term(xi, 1);
        }
        b.add_constraint(any, Relation::Ge, 1);

        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let yij = y[i * n + j].expect("off-diagonal edge variable");

                // an edge needs both endpoints selected
                b.add_constraint(
                    LinExpr::new().term(yij, 1).term(x[i], -1),
                    Relation::Le,
                    0,
                );
                b.add_constraint(
                    LinExpr::new().term(yij, 1).term(x[j], -1),
                    Relation::Le,
                    0,
                );

                // pos[j] - pos[i] - M*y[i][j] >= 1 - M
                b.add_constraint(
                    LinExpr::new()
                        .term(pos[j], 1)
                        .term(pos[i], -1)
                        .term(yij, -big_m),
                    Relation::Ge,
                    1 - big_m,
                );
            }
        }

        // at most one successor and one predecessor per selected slide
        for i in 0..n {
            let mut out = LinExpr::new();
            let mut inc = LinExpr::new();
            for j in 0..n {
                if i != j {
                    out = out.term(y[i * n + j].expect("edge variable"), 1);
                    inc = inc.term(y[j * n + i].expect("edge variable"), 1);
                }
            }
            b.add_constraint(out.term(x[i], -1), Relation::Le, 0);
            b.add_constraint(inc.term(x[i], -1), Relation::Le, 0);
        }

        // maximize interest over realized adjacencies
        let mut objective = LinExpr::new();
        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let score = i64::from(scores.get(i, j));
                if score > 0 {
                    objective = objective.term(y[i * n + j].expect("edge variable"), score);
                }
            }
        }
        b.set_objective(objective, Direction::Maximize);

        Self { model: b.build(), slides, scores, x, y, pos }
    }

    /// Candidate count
    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    #[must_use]
    pub const fn scores(&self) -> &ScoreMatrix {
        &self.scores
    }

    /// The generic model a black-box solver consumes
    #[must_use]
    pub const fn model(&self) -> &Model {
        &self.model
    }

    /// Selection variable of slide `i`
    #[must_use]
    pub fn x(&self, i: usize) -> VarId {
        self.x[i]
    }

    /// Adjacency variable for "slide `i` immediately precedes slide `j`".
    ///
    /// # Panics
    /// Panics on the diagonal (`i == j`), which has no variable.
    #[must_use]
    pub fn y(&self, i: usize, j: usize) -> VarId {
        assert_ne!(i, j, "no adjacency variable on the diagonal");
        self.y[i * self.slides.len() + j].expect("off-diagonal edge variable")
    }

    /// Position variable of slide `i`
    #[must_use]
    pub fn pos(&self, i: usize) -> VarId {
        self.pos[i]
    }

    /// The big-M constant used by the ordering constraints
    #[must_use]
    pub fn big_m(&self) -> i64 {
        self.slides.len() as i64
    }
}
