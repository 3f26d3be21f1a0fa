//! Member CLI commands

use clap::Subcommand;

use crate::display::format_member_list;
use crate::error::TourResult;
use crate::services::MemberService;
use crate::session::Session;

/// Member subcommands
#[derive(Subcommand)]
pub enum MemberCommands {
    /// Add a member to the active tour
    Add {
        /// Member name
        name: String,
        /// Phone number or email
        #[arg(short, long)]
        contact: Option<String>,
    },
    /// List members of the active tour
    #[command(alias = "ls")]
    List,
    /// Remove a member and every expense they paid for or shared
    Remove {
        /// Member name or ID
        member: String,
    },
}

/// Handle a member command
pub fn handle_member_command(session: &mut Session, cmd: MemberCommands) -> TourResult<()> {
    let mut service = MemberService::new(session);

    match cmd {
        MemberCommands::Add { name, contact } => {
            let member = service.add(&name, contact.as_deref())?;
            println!("Added member: {} ({})", member.name, member.id);
        }

        MemberCommands::List => {
            print!("{}", format_member_list(service.list()?));
        }

        MemberCommands::Remove { member } => {
            let (removed, swept) = service.remove(&member)?;
            println!("Removed member: {}", removed.name);
            if !swept.is_empty() {
                println!("  Also removed {} expense(s) involving them:", swept.len());
                for expense in &swept {
                    println!("    {}", expense);
                }
            }
        }
    }

    Ok(())
}
