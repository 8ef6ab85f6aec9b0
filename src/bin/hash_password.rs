/**
 * Password Hash Tool
 *
 * Prints a bcrypt hash for a password, for filling `hashed_password` in
 * `users.json`. The password comes from the first argument, or from the
 * first line of stdin when no argument is given. The cost is read from
 * `BCRYPT_COST` (default 12).
 *
 * ```text
 * echo -n 'secret' | hash-password
 * ```
 */

use std::io::BufRead;

use servdesk::backend::auth::PasswordVerifier;
use servdesk::shared::config::bcrypt_cost_from;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let cost = bcrypt_cost_from(|key| std::env::var(key).ok())?;

    let password = match std::env::args().nth(1) {
        Some(password) => password,
        None => {
            let mut line = String::new();
            std::io::stdin().lock().read_line(&mut line)?;
            line.trim_end_matches(['\r', '\n']).to_string()
        }
    };

    if password.is_empty() {
        return Err("password must not be empty".into());
    }

    let hash = PasswordVerifier::new(cost).hash(&password)?;
    println!("{hash}");

    Ok(())
}
