use std::{
	collections::HashSet,
	fmt::{Display, Formatter},
};

/// Role memberships as delivered by the identity provider. Unknown labels
/// are dropped at parse, which composes with "empty role set denies".
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Role {
	JobseekerFacing,
	EmployerFacing,
	General,
	Developer,
}
impl Role {
	pub fn from_label(label: &str) -> Option<Self> {
		match label.trim() {
			"jobseeker-facing" => Some(Self::JobseekerFacing),
			"employer-facing" => Some(Self::EmployerFacing),
			"general" => Some(Self::General),
			"developer" => Some(Self::Developer),
			_ => None,
		}
	}

	pub fn label(&self) -> &'static str {
		match self {
			Self::JobseekerFacing => "jobseeker-facing",
			Self::EmployerFacing => "employer-facing",
			Self::General => "general",
			Self::Developer => "developer",
		}
	}
}

pub fn parse_roles<'a, I>(labels: I) -> HashSet<Role>
where
	I: IntoIterator<Item = &'a str>,
{
	labels.into_iter().filter_map(Role::from_label).collect()
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Operation {
	CvLookup,
	SummaryLookup,
	Search,
}
impl Operation {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::CvLookup => "cv-lookup",
			Self::SummaryLookup => "summary-lookup",
			Self::Search => "search",
		}
	}
}

impl Display for Operation {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Pure allow/deny decision for one operation against the caller's role
/// set. Evaluated fresh per request, before any index query is issued.
pub fn decide(operation: Operation, roles: &HashSet<Role>) -> bool {
	// Every operation here returns identity-revealing fields, so they all
	// share the identity-revealing allow-list.
	let allowed: &[Role] = match operation {
		Operation::CvLookup | Operation::SummaryLookup | Operation::Search =>
			&[Role::EmployerFacing, Role::Developer],
	};

	roles.iter().any(|role| allowed.contains(role))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn employer_facing_and_developer_are_allowed() {
		for role in [Role::EmployerFacing, Role::Developer] {
			let roles = HashSet::from([role]);

			assert!(decide(Operation::CvLookup, &roles));
			assert!(decide(Operation::SummaryLookup, &roles));
			assert!(decide(Operation::Search, &roles));
		}
	}

	#[test]
	fn general_and_jobseeker_facing_are_denied() {
		for role in [Role::General, Role::JobseekerFacing] {
			let roles = HashSet::from([role]);

			assert!(!decide(Operation::CvLookup, &roles));
			assert!(!decide(Operation::SummaryLookup, &roles));
			assert!(!decide(Operation::Search, &roles));
		}
	}

	#[test]
	fn empty_role_set_always_denies() {
		let roles = HashSet::new();

		assert!(!decide(Operation::CvLookup, &roles));
		assert!(!decide(Operation::Search, &roles));
	}

	#[test]
	fn one_allowed_role_is_enough() {
		let roles = HashSet::from([Role::General, Role::EmployerFacing]);

		assert!(decide(Operation::CvLookup, &roles));
	}

	#[test]
	fn unknown_labels_are_dropped() {
		let roles = parse_roles(["superuser", " employer-facing ", ""]);

		assert_eq!(roles, HashSet::from([Role::EmployerFacing]));
	}
}
