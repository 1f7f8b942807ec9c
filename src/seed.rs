//! One-shot fixture seeder.
//!
//! Inserts a fixed set of users, each owning one or more posts, for
//! development and demos. There is no idempotence guarantee: a second run
//! against the same database trips the unique email constraint and fails.

use colored::Colorize;
use sqlx::SqlitePool;

use crate::error::Result;
use crate::model::{NewPost, NewUser};
use crate::storage::UserRepository;

/// The fixture accounts inserted by `crier seed`.
pub fn fixtures() -> Vec<NewUser> {
    vec![
        NewUser::new("lionel.messi@gmail.com")
            .with_name("Lionel", "Messi")
            .with_password("motdepasse")
            .with_posts(vec![NewPost::with_content("https://www.psg.fr/")]),
        NewUser::new("kylian.mbappe@gmail.com")
            .with_name("Kylian", "Mbappé")
            .with_password("motdepasse")
            .with_posts(vec![NewPost::with_content("https://www.psg.fr/")]),
        NewUser::new("neymar.dasilvasantosjunior@gmail.com")
            .with_name("Neymar", "da Silva Santos Júnior")
            .with_password("motdepasse")
            .with_posts(vec![
                NewPost::with_content("https://www.psg.fr/"),
                NewPost::with_content("https://www.psg.fr/"),
            ]),
    ]
}

/// Insert every fixture user, logging the generated ids. The first failure
/// aborts the run and propagates to the caller.
pub async fn run(pool: &SqlitePool) -> Result<()> {
    println!("Start seeding ...");

    let repo = UserRepository::new(pool);
    for fixture in fixtures() {
        let user = repo.create(fixture).await?;
        println!("{} user with id: {}", "Created".green(), user.id);
    }

    println!("Seeding finished.");
    Ok(())
}
