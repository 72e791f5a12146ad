//! Output formatting for CLI responses.

use useradm_core::User;

/// Renders one user record as a single stdout line.
///
/// The password is shown verbatim; the store keeps it in plaintext and this
/// tool does not pretend otherwise.
pub fn format_user(user: &User) -> String {
    format!(
        "id={} username={} email={} password={}",
        user.id, user.username, user.email, user.password
    )
}

/// Prints a single record, either as a line or as JSON.
pub fn print_user(user: &User, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(user)?);
    } else {
        println!("{}", format_user(user));
    }
    Ok(())
}

/// Prints records one per line, or as one JSON array.
pub fn print_users(users: &[User], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(users)?);
    } else {
        for user in users {
            println!("{}", format_user(user));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_is_single_line_key_value() {
        let user = User {
            id: 7,
            username: "bob".to_string(),
            email: "bob@mail.com".to_string(),
            password: "bobpass".to_string(),
        };
        assert_eq!(
            format_user(&user),
            "id=7 username=bob email=bob@mail.com password=bobpass"
        );
    }
}
