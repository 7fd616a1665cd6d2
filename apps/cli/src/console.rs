//! Line-oriented commands for the interactive console.

use userdir_users::{AccountService, UserStore};

use crate::directory::sorted_accounts;

const HELP: &str = "Available commands:
  /help, /h                               - Show this help
  /users, /u                              - List all accounts
  /count                                  - Show the number of accounts
  /login <username> <password>            - Check a password by username
  /login-email <email> <password>         - Check a password by email
  /register <username> <password> [email] - Register a new account
  /remove <username>                      - Remove an account
  /email <username> <new-email>           - Change an account's email
  /quit, /exit, /q                        - Exit console";

/// What the console loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Continue(String),
    Quit(String),
}

fn ok_or_failed(succeeded: bool, ok: String, failed: String) -> Reply {
    Reply::Continue(if succeeded { ok } else { failed })
}

/// Run one console command against the directory.
pub fn execute(service: &mut AccountService<UserStore>, line: &str) -> Reply {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Reply::Continue(String::new());
    };
    let args: Vec<&str> = words.collect();

    match (command, args.as_slice()) {
        ("/quit" | "/exit" | "/q", _) => Reply::Quit("Goodbye!".to_string()),
        ("/help" | "/h", _) => Reply::Continue(HELP.to_string()),
        ("/users" | "/u", []) => {
            let users = sorted_accounts(service.list_accounts());
            if users.is_empty() {
                return Reply::Continue("No accounts found".to_string());
            }

            let mut out = String::from("Accounts:");
            for user in users {
                out.push_str(&format!(
                    "\n  {} ({})",
                    user.username(),
                    user.email().unwrap_or("no email")
                ));
            }
            Reply::Continue(out)
        }
        ("/count", []) => Reply::Continue(format!("{} accounts", service.repository().count())),
        ("/login", [username, password]) => ok_or_failed(
            service.authenticate_by_username(username, password),
            format!("Logged in as {username}"),
            "Invalid credentials".to_string(),
        ),
        ("/login-email", [email, password]) => ok_or_failed(
            service.authenticate_by_email(email, password),
            format!("Logged in as {email}"),
            "Invalid credentials".to_string(),
        ),
        ("/register", [username, password]) => ok_or_failed(
            service.register(username, password, ""),
            format!("Registered {username}"),
            format!("Could not register {username}: username taken"),
        ),
        ("/register", [username, password, email]) => ok_or_failed(
            service.register(username, password, email),
            format!("Registered {username}"),
            format!("Could not register {username}: username or email taken"),
        ),
        ("/remove", [username]) => ok_or_failed(
            service.deregister(username),
            format!("Removed {username}"),
            format!("No account named {username}"),
        ),
        ("/email", [username, email]) => ok_or_failed(
            service.update_email(username, email),
            format!("Changed email of {username} to {email}"),
            format!("Could not change email of {username}"),
        ),
        (
            "/users" | "/u" | "/count" | "/login" | "/login-email" | "/register" | "/remove"
            | "/email",
            _,
        ) => Reply::Continue(format!("Wrong arguments for {command}\n{HELP}")),
        _ => Reply::Continue(format!(
            "Unknown command: {command}\nType '/help' for available commands"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use userdir_users::User;

    fn create_test_service() -> AccountService<UserStore> {
        let store = UserStore::new(vec![
            User::new("admin", "1234", Some("admin@gmail.com".to_string())),
            User::new("ali", "qwert", Some("ali@gmail.com".to_string())),
        ])
        .unwrap();
        AccountService::new(store)
    }

    fn reply(service: &mut AccountService<UserStore>, line: &str) -> String {
        match execute(service, line) {
            Reply::Continue(text) | Reply::Quit(text) => text,
        }
    }

    #[test]
    fn help_descriptions_are_aligned() {
        let columns: Vec<usize> = HELP
            .lines()
            .skip(1)
            .map(|line| line.find(" - ").unwrap())
            .collect();

        assert!(columns.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn quit_ends_session() {
        let mut service = create_test_service();

        assert_eq!(execute(&mut service, "/q"), Reply::Quit("Goodbye!".to_string()));
        assert_eq!(execute(&mut service, "/exit"), Reply::Quit("Goodbye!".to_string()));
    }

    #[test]
    fn users_lists_accounts_sorted() {
        let mut service = create_test_service();
        service.register("guest", "guest", "");

        assert_eq!(
            reply(&mut service, "/users"),
            "Accounts:\n  admin (admin@gmail.com)\n  ali (ali@gmail.com)\n  guest (no email)"
        );
    }

    #[test]
    fn users_on_empty_directory() {
        let mut service = AccountService::new(UserStore::default());

        assert_eq!(reply(&mut service, "/u"), "No accounts found");
    }

    #[test]
    fn login_checks_credentials() {
        let mut service = create_test_service();

        assert_eq!(reply(&mut service, "/login admin 1234"), "Logged in as admin");
        assert_eq!(reply(&mut service, "/login admin abcd"), "Invalid credentials");
        assert_eq!(
            reply(&mut service, "/login-email ali@gmail.com qwert"),
            "Logged in as ali@gmail.com"
        );
    }

    #[test]
    fn register_then_count() {
        let mut service = create_test_service();

        assert_eq!(
            reply(&mut service, "/register reza 123abc reza@sharif.edu"),
            "Registered reza"
        );
        assert_eq!(
            reply(&mut service, "/register ali x y@z.com"),
            "Could not register ali: username or email taken"
        );
        assert_eq!(reply(&mut service, "/count"), "3 accounts");
    }

    #[test]
    fn email_and_remove_update_directory() {
        let mut service = create_test_service();

        assert_eq!(
            reply(&mut service, "/email ali admin@gmail.com"),
            "Could not change email of ali"
        );
        assert_eq!(
            reply(&mut service, "/email ali ali_new@example.com"),
            "Changed email of ali to ali_new@example.com"
        );
        assert_eq!(reply(&mut service, "/remove ali"), "Removed ali");
        assert_eq!(reply(&mut service, "/remove ali"), "No account named ali");
        assert!(service.repository().find_by_email("ali_new@example.com").is_none());
    }

    #[test]
    fn malformed_commands_do_not_mutate() {
        let mut service = create_test_service();

        assert!(reply(&mut service, "/register onlyname").starts_with("Wrong arguments for /register"));
        assert!(reply(&mut service, "/frobnicate").starts_with("Unknown command: /frobnicate"));
        assert_eq!(reply(&mut service, "   "), "");
        assert_eq!(service.repository().count(), 2);
    }
}
