use clap::Parser;
use contact_client::ContactClient;

#[derive(Parser, Debug)]
#[clap(about = "Command-line access to the contact backend")]
struct Cli {
    #[clap(short, long, default_value = "http://127.0.0.1:5000")]
    server: String,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    Signup {
        #[clap(long)]
        name: String,
        #[clap(long)]
        email: String,
        #[clap(long)]
        password: String,
    },
    Login {
        #[clap(long)]
        email: String,
        #[clap(long)]
        password: String,
    },
    /// Show the profile of the logged-in user.
    Profile,
    Contact {
        #[clap(long)]
        name: String,
        #[clap(long)]
        email: String,
        #[clap(long)]
        message: String,
        #[clap(long)]
        number: Option<i64>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();
    let mut client = ContactClient::connect(&args.server)?;

    match args.command {
        Command::Signup {
            name,
            email,
            password,
        } => {
            let message = client.signup(&name, &email, &password).await?;
            println!("{}", message);
        }
        Command::Login { email, password } => {
            client.login(&email, &password).await?;
            println!("Successfully logged in!");
        }
        Command::Profile => {
            let profile = client.profile().await?;
            println!("{} <{}> (id {})", profile.name, profile.email, profile.id);
        }
        Command::Contact {
            name,
            email,
            message,
            number,
        } => {
            let reply = client.contact(&name, &email, &message, number).await?;
            println!("{}", reply);
        }
    }

    Ok(())
}
