//! Resources compiled into the binary and looked up by logical name.

pub const INITIAL_EMPLOYEES: &str = "initial_employees.yaml";

const BUNDLED: &[(&str, &str)] = &[(
    INITIAL_EMPLOYEES,
    include_str!("../resources/initial_employees.yaml"),
)];

pub fn bundled(name: &str) -> Option<&'static str> {
    BUNDLED
        .iter()
        .find(|(logical, _)| *logical == name)
        .map(|(_, contents)| *contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_employees_are_bundled() {
        let raw = bundled(INITIAL_EMPLOYEES).unwrap();
        assert!(raw.starts_with("employees:"));
    }

    #[test]
    fn unknown_names_resolve_to_nothing() {
        assert!(bundled("initial_employees.yml").is_none());
        assert!(bundled("../resources/initial_employees.yaml").is_none());
    }
}
