//! Projection of content records into keyed visual nodes.
//!
//! Every section maps its slice of the catalog through [`project`] on each
//! render pass. Output order equals input order and each node carries the
//! record's reconciliation key. Nothing is cached here.

use folio_types::Keyed;

/// A visual node paired with the key of the record it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projected<'a, N> {
    pub key: &'a str,
    pub node: N,
}

/// Maps each record to a node with `render`, preserving input order.
///
/// Total and deterministic for a deterministic `render`: an empty slice yields
/// an empty vector and the input is never mutated.
pub fn project<'a, R, N>(records: &'a [R], mut render: impl FnMut(&'a R) -> N) -> Vec<Projected<'a, N>>
where
    R: Keyed,
{
    records
        .iter()
        .map(|record| Projected {
            key: record.key(),
            node: render(record),
        })
        .collect()
}

/// Drops the keys, keeping only the nodes in order.
pub fn into_nodes<N>(projected: Vec<Projected<'_, N>>) -> Vec<N> {
    projected.into_iter().map(|p| p.node).collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use folio_types::{NavItem, PortfolioEntry, Skill, Testimonial};

    use super::*;

    fn entry(id: &str) -> PortfolioEntry {
        PortfolioEntry {
            id: id.into(),
            title: format!("Title {id}"),
            description: "desc".into(),
            image: "https://picsum.photos/seed/x/10/10".into(),
            category: "Automation".into(),
            tags: vec!["n8n".into()],
        }
    }

    #[test]
    fn preserves_input_order() {
        let items = vec![NavItem::new("a", "#a"), NavItem::new("b", "#b"), NavItem::new("c", "#c")];
        let projected = project(&items, |item| item.href.clone());
        let keys: Vec<&str> = projected.iter().map(|p| p.key).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
        assert_eq!(into_nodes(projected), vec!["#a", "#b", "#c"]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let skills: Vec<Skill> = Vec::new();
        assert!(project(&skills, |skill| skill.name.len()).is_empty());
    }

    #[test]
    fn keys_follow_records_when_reordered() {
        let first = vec![entry("alpha"), entry("beta"), entry("gamma")];
        let reordered = vec![entry("gamma"), entry("alpha"), entry("beta")];

        let render = |e: &PortfolioEntry| e.title.clone();
        let before = project(&first, render);
        let after = project(&reordered, render);

        for projected in before.iter().chain(after.iter()) {
            assert_eq!(projected.node, format!("Title {}", projected.key));
        }
        let keys: Vec<&str> = after.iter().map(|p| p.key).collect();
        assert_eq!(keys, vec!["gamma", "alpha", "beta"]);
        let unique: HashSet<&str> = keys.iter().copied().collect();
        assert_eq!(unique.len(), keys.len());
    }

    #[test]
    fn projection_is_deterministic_and_leaves_input_alone() {
        let testimonials = vec![Testimonial {
            name: "Ayesha Khan".into(),
            role: "Head of Growth".into(),
            company: "TechFlow".into(),
            content: "Fast".into(),
            image: "https://picsum.photos/seed/a/1/1".into(),
        }];
        let snapshot = testimonials.clone();
        let render = |t: &Testimonial| format!("{} @ {}", t.role, t.company);
        assert_eq!(project(&testimonials, render), project(&testimonials, render));
        assert_eq!(testimonials, snapshot);
    }
}
