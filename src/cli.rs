use clap::{Args, Parser, Subcommand};
use clinica_client::screens::doctor_form::DoctorField;
use clinica_core::models::{Address, EntityId};

#[derive(Debug, Parser)]
#[command(name = "clinica", version, about = "Clinic management client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage doctors
    Doctors {
        #[command(subcommand)]
        command: DoctorCommand,
    },
    /// Manage patients
    Patients {
        #[command(subcommand)]
        command: PatientCommand,
    },
    /// List and schedule appointments
    Appointments {
        #[command(subcommand)]
        command: AppointmentCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum DoctorCommand {
    /// List doctors grouped by initial
    List {
        /// Filter by name or specialty
        #[arg(long, short = 's', default_value = "")]
        search: String,
    },
    /// Show one doctor's full record
    Show { id: EntityId },
    /// Register a new doctor
    Create {
        #[arg(long)]
        nome: String,
        #[arg(long)]
        especialidade: String,
        #[arg(long)]
        crm: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        telefone: String,
        #[command(flatten)]
        address: AddressArgs,
    },
    /// Update name, phone or address of an existing doctor
    Update {
        id: EntityId,
        #[arg(long)]
        nome: Option<String>,
        #[arg(long)]
        telefone: Option<String>,
        #[command(flatten)]
        address: OptionalAddressArgs,
    },
}

#[derive(Debug, Subcommand)]
pub enum PatientCommand {
    List,
    /// Register a new patient
    Create {
        #[arg(long)]
        nome: String,
        #[arg(long)]
        cpf: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        telefone: String,
        #[command(flatten)]
        address: OptionalAddressArgs,
    },
    Delete { id: EntityId },
}

#[derive(Debug, Subcommand)]
pub enum AppointmentCommand {
    List,
    /// Schedule an appointment at a local date and time
    Schedule {
        #[arg(long)]
        patient: EntityId,
        #[arg(long)]
        doctor: EntityId,
        /// Local date, YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Local time, HH:MM
        #[arg(long)]
        time: String,
    },
}

#[derive(Debug, Args)]
pub struct AddressArgs {
    #[arg(long)]
    pub logradouro: String,
    #[arg(long, default_value = "")]
    pub numero: String,
    #[arg(long, default_value = "")]
    pub complemento: String,
    #[arg(long)]
    pub bairro: String,
    #[arg(long)]
    pub cidade: String,
    #[arg(long)]
    pub uf: String,
    #[arg(long)]
    pub cep: String,
}

impl From<AddressArgs> for Address {
    fn from(args: AddressArgs) -> Self {
        Address {
            logradouro: args.logradouro,
            numero: args.numero,
            complemento: args.complemento,
            bairro: args.bairro,
            cidade: args.cidade,
            uf: args.uf,
            cep: args.cep,
        }
    }
}

#[derive(Debug, Args)]
pub struct OptionalAddressArgs {
    #[arg(long)]
    pub logradouro: Option<String>,
    #[arg(long)]
    pub numero: Option<String>,
    #[arg(long)]
    pub complemento: Option<String>,
    #[arg(long)]
    pub bairro: Option<String>,
    #[arg(long)]
    pub cidade: Option<String>,
    #[arg(long)]
    pub uf: Option<String>,
    #[arg(long)]
    pub cep: Option<String>,
}

impl OptionalAddressArgs {
    /// Overwrites the fields that were given on the command line.
    pub fn apply(self, address: &mut Address) {
        let fields = [
            (self.logradouro, &mut address.logradouro),
            (self.numero, &mut address.numero),
            (self.complemento, &mut address.complemento),
            (self.bairro, &mut address.bairro),
            (self.cidade, &mut address.cidade),
            (self.uf, &mut address.uf),
            (self.cep, &mut address.cep),
        ];
        for (value, slot) in fields {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }

    /// The given fields as doctor-form edits.
    pub fn doctor_edits(self) -> Vec<(DoctorField, String)> {
        [
            (DoctorField::Logradouro, self.logradouro),
            (DoctorField::Numero, self.numero),
            (DoctorField::Complemento, self.complemento),
            (DoctorField::Bairro, self.bairro),
            (DoctorField::Cidade, self.cidade),
            (DoctorField::Uf, self.uf),
            (DoctorField::Cep, self.cep),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|value| (field, value)))
        .collect()
    }
}

