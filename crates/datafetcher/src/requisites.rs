use lazy_static::lazy_static;
use models::{
    course_data::CourseCode,
    requisite::{RequisiteEdge, RequisiteKind},
};
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    static ref PREREQ: Regex =
        Regex::new(r"(?i:prereq):\s*([A-Z]{1,10}) ([0-9]{1,3}[A-Z]?)\b").unwrap();
    static ref ANTIREQ: Regex =
        Regex::new(r"(?i:antireq):\s*([A-Z]{1,10}) ([0-9]{1,3}[A-Z]?)\b").unwrap();
}

/// The requisites found in a requirements description
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedRequisites {
    pub pre: Option<CourseCode>,
    pub anti: Option<CourseCode>,
}

/// Extracts at most one prerequisite and one antirequisite from free text.
///
/// The grammar is narrow: a `Prereq:` (or `Antireq:`) label,
/// matched case-insensitively, followed directly by an upper-case subject
/// and a catalog number, e.g. `Prereq: MATH 135`. Only the first match of
/// each label counts. Boolean requirement logic such as `MATH 135 or 145`
/// is not modelled; text that does not fit yields no edge.
///
/// # Arguments
/// * `description` - The course's requirements description, if any
pub fn extract_requisites(description: Option<&str>) -> ExtractedRequisites {
    let Some(text) = description else {
        return ExtractedRequisites::default();
    };

    ExtractedRequisites {
        pre: first_course(&PREREQ, text),
        anti: first_course(&ANTIREQ, text),
    }
}

fn first_course(pattern: &Regex, text: &str) -> Option<CourseCode> {
    pattern
        .captures(text)
        .map(|caps| CourseCode::new(&caps[1], &caps[2]))
}

/// Holds requisite edges until every course of the term has been loaded
#[derive(Debug, Default)]
pub struct RequisiteResolver {
    pre: Vec<RequisiteEdge>,
    anti: Vec<RequisiteEdge>,
}

impl RequisiteResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the requisites extracted for `course`
    pub fn defer(&mut self, course: &CourseCode, extracted: ExtractedRequisites) {
        if let Some(pre) = extracted.pre {
            self.pre.push(RequisiteEdge::new(course.clone(), pre));
        }
        if let Some(anti) = extracted.anti {
            self.anti.push(RequisiteEdge::new(course.clone(), anti));
        }
    }

    /// Number of queued edges of `kind`, before filtering
    pub fn pending(&self, kind: RequisiteKind) -> usize {
        self.edges(kind).len()
    }

    /// The queued edges of `kind` whose target is in `known` and which are
    /// not self-references, in the order they were queued
    pub fn resolve(&self, kind: RequisiteKind, known: &HashSet<CourseCode>) -> Vec<RequisiteEdge> {
        self.edges(kind)
            .iter()
            .filter(|edge| known.contains(&edge.requisite) && !edge.is_self_reference())
            .cloned()
            .collect()
    }

    fn edges(&self, kind: RequisiteKind) -> &[RequisiteEdge] {
        match kind {
            RequisiteKind::Pre => &self.pre,
            RequisiteKind::Anti => &self.anti,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(subject: &str, number: &str) -> CourseCode {
        CourseCode::new(subject, number)
    }

    #[test]
    fn test_extract_pre_and_anti() {
        let extracted = extract_requisites(Some("Prereq: MATH 127. AntiReq: MATH 137"));
        assert_eq!(extracted.pre, Some(code("MATH", "127")));
        assert_eq!(extracted.anti, Some(code("MATH", "137")));
    }

    #[test]
    fn test_extract_only_first_match() {
        let extracted = extract_requisites(Some(
            "Prereq: CS 135, Prereq: CS 145; Antireq: CS 115, Antireq: CS 116",
        ));
        assert_eq!(extracted.pre, Some(code("CS", "135")));
        assert_eq!(extracted.anti, Some(code("CS", "115")));
    }

    #[test]
    fn test_extract_with_coreq_clause() {
        let extracted = extract_requisites(Some("Prereq: PHYS 121 Coreq: MATH 128"));
        assert_eq!(extracted.pre, Some(code("PHYS", "121")));
        assert_eq!(extracted.anti, None);
    }

    #[test]
    fn test_extract_lettered_catalog_number() {
        let extracted = extract_requisites(Some("Antireq: ECE 100A"));
        assert_eq!(extracted.anti, Some(code("ECE", "100A")));
    }

    #[test]
    fn test_extract_nothing() {
        assert_eq!(extract_requisites(None), ExtractedRequisites::default());
        assert_eq!(
            extract_requisites(Some("Prereq: One of MATH 135, 145")),
            ExtractedRequisites::default()
        );
        assert_eq!(
            extract_requisites(Some("Level at least 2A Honours Mathematics students")),
            ExtractedRequisites::default()
        );
        // Four-digit numbers are not catalog numbers
        assert_eq!(extract_requisites(Some("Prereq: MATH 1350")).pre, None);
    }

    #[test]
    fn test_resolve_filters_unknown_and_self_references() {
        let math135 = code("MATH", "135");
        let math137 = code("MATH", "137");

        let mut resolver = RequisiteResolver::new();
        resolver.defer(
            &math135,
            ExtractedRequisites {
                pre: Some(code("MATH", "127")),
                anti: Some(math137.clone()),
            },
        );
        resolver.defer(
            &math137,
            ExtractedRequisites {
                pre: None,
                anti: Some(math137.clone()),
            },
        );

        let known = HashSet::from([math135.clone(), math137.clone()]);

        assert_eq!(resolver.pending(RequisiteKind::Pre), 1);
        assert_eq!(resolver.pending(RequisiteKind::Anti), 2);
        assert!(resolver.resolve(RequisiteKind::Pre, &known).is_empty());
        assert_eq!(
            resolver.resolve(RequisiteKind::Anti, &known),
            vec![RequisiteEdge::new(math135, math137)]
        );
    }
}
