use colored::*;

use super::utils::truncate;
use crate::error::UsersResult;
use crate::models::User;

pub fn print_users(users: &[User], format: &str) -> UsersResult<()> {
    if format == "json" {
        println!("{}", serde_json::to_string_pretty(users)?);
        return Ok(());
    }

    if users.is_empty() {
        println!("{}", "No users found.".dimmed());
        return Ok(());
    }

    match format {
        "table" => {
            println!("{}", "─".repeat(80).dimmed());
            println!(
                "{:<8} {:<30} {:<40}",
                "ID".bold(),
                "Name".bold(),
                "Email".bold()
            );
            println!("{}", "─".repeat(80).dimmed());

            for user in users {
                println!(
                    "{:<8} {:<30} {:<40}",
                    user.id.to_string().blue(),
                    truncate(&user.name, 30),
                    truncate(&user.email, 40).cyan()
                );
            }
            println!("{}", "─".repeat(80).dimmed());
        }
        _ => {
            println!("{} ({})", "Users".bold(), users.len());
            println!("{}", "─".repeat(50).dimmed());
            for user in users {
                print_card(user);
            }
        }
    }

    Ok(())
}

pub fn print_user(user: &User, format: &str) -> UsersResult<()> {
    if format == "json" {
        println!("{}", serde_json::to_string_pretty(user)?);
    } else {
        println!("{}: {}", "ID".bold(), user.id.to_string().bright_blue().bold());
        println!("{}: {}", "Name".bold(), user.name);
        println!("{}: {}", "Email".bold(), user.email.cyan());
    }
    Ok(())
}

fn print_card(user: &User) {
    let name = if user.name.is_empty() {
        "(no name)".dimmed()
    } else {
        user.name.as_str().bold()
    };
    println!("  {} {}", "●".cyan(), name);
    println!("    {}  {}", user.email.cyan(), format!("#{}", user.id).dimmed());
}
