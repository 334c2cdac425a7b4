mod cli;

use clap::Parser;
use clinica_client::screens::appointment_list::AppointmentList;
use clinica_client::screens::doctor_directory::DoctorDirectory;
use clinica_client::screens::doctor_form::{DoctorField, DoctorForm};
use clinica_client::screens::patient_form::PatientForm;
use clinica_client::screens::patient_list::PatientList;
use clinica_client::screens::scheduling::SchedulingScreen;
use clinica_client::{ClientConfig, ClinicApi, HttpClinicApi};
use clinica_core::models::Address;
use clinica_core::outcome::SubmitOutcome;
use color_eyre::eyre::{eyre, Result};
use dotenv::dotenv;
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

use cli::{AppointmentCommand, Cli, Command, DoctorCommand, PatientCommand};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    let cli = Cli::parse();

    // Load configuration
    let config = ClientConfig::from_env()?;

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let api = HttpClinicApi::new(&config)?;
    info!("Using clinic backend at {}", config.api_url);

    // Dropping the command future cancels whatever request is in flight
    tokio::select! {
        result = run(cli.command, &api, &config) => result,
        _ = tokio::signal::ctrl_c() => {
            warn!("Interrupted, request cancelled");
            Ok(())
        }
    }
}

async fn run(command: Command, api: &HttpClinicApi, config: &ClientConfig) -> Result<()> {
    match command {
        Command::Doctors { command } => run_doctors(command, api, config).await,
        Command::Patients { command } => run_patients(command, api, config).await,
        Command::Appointments { command } => run_appointments(command, api, config).await,
    }
}

async fn run_doctors(command: DoctorCommand, api: &HttpClinicApi, config: &ClientConfig) -> Result<()> {
    match command {
        DoctorCommand::List { search } => {
            let mut directory = DoctorDirectory::new();
            directory.load(api, config.page_size).await?;
            directory.set_search(search);

            for section in directory.sections() {
                println!("{}", section.title);
                for doctor in section.doctors {
                    println!("  [{}] {} | {} | CRM: {}", doctor.id, doctor.nome, doctor.especialidade, doctor.crm);
                }
            }
            Ok(())
        }
        DoctorCommand::Show { id } => {
            let doctor = api.get_doctor(&id).await?;
            println!("{} ({})", doctor.nome, doctor.especialidade);
            println!("CRM: {}", doctor.crm);
            println!("Email: {}", doctor.email);
            println!("Telefone: {}", doctor.telefone);
            if let Some(address) = doctor.endereco {
                println!("Endereço: {}, {}", address.logradouro, address.cidade);
            }
            Ok(())
        }
        DoctorCommand::Create {
            nome,
            especialidade,
            crm,
            email,
            telefone,
            address,
        } => {
            let address = Address::from(address);
            let mut form = DoctorForm::new();
            let edits = [
                (DoctorField::Nome, nome),
                (DoctorField::Especialidade, especialidade),
                (DoctorField::Crm, crm),
                (DoctorField::Email, email),
                (DoctorField::Telefone, telefone),
                (DoctorField::Logradouro, address.logradouro),
                (DoctorField::Numero, address.numero),
                (DoctorField::Complemento, address.complemento),
                (DoctorField::Bairro, address.bairro),
                (DoctorField::Cidade, address.cidade),
                (DoctorField::Uf, address.uf),
                (DoctorField::Cep, address.cep),
            ];
            for (field, value) in edits {
                form.set(field, value);
            }

            report(form.save(api).await?, "Doctor registered")
        }
        DoctorCommand::Update {
            id,
            nome,
            telefone,
            address,
        } => {
            let doctor = api.get_doctor(&id).await?;
            let mut form = DoctorForm::edit(&doctor);
            if let Some(nome) = nome {
                form.set(DoctorField::Nome, nome);
            }
            if let Some(telefone) = telefone {
                form.set(DoctorField::Telefone, telefone);
            }
            for (field, value) in address.doctor_edits() {
                form.set(field, value);
            }

            report(form.save(api).await?, "Profile updated")
        }
    }
}

async fn run_patients(command: PatientCommand, api: &HttpClinicApi, config: &ClientConfig) -> Result<()> {
    match command {
        PatientCommand::List => {
            let mut list = PatientList::new();
            list.load(api, config.page_size).await?;

            if list.patients().is_empty() {
                println!("No patients found.");
            }
            for patient in list.patients() {
                println!("[{}] {} | CPF: {} | {}", patient.id, patient.nome, patient.cpf, patient.email);
            }
            Ok(())
        }
        PatientCommand::Create {
            nome,
            cpf,
            email,
            telefone,
            address,
        } => {
            let mut endereco = Address::default();
            address.apply(&mut endereco);
            let form = PatientForm {
                nome,
                email,
                telefone,
                cpf,
                endereco,
            };

            report(form.save(api).await?, "Patient registered")
        }
        PatientCommand::Delete { id } => {
            let mut list = PatientList::new();
            report(list.delete(api, &id, config.page_size).await, "Patient deleted")
        }
    }
}

async fn run_appointments(
    command: AppointmentCommand,
    api: &HttpClinicApi,
    config: &ClientConfig,
) -> Result<()> {
    match command {
        AppointmentCommand::List => {
            let mut list = AppointmentList::new();
            list.load(api).await?;

            let rows = list.rows();
            if rows.is_empty() {
                println!("No appointments scheduled.");
            }
            for row in rows {
                println!("{} [{}] Doctor: {} | Patient: {}", row.when, row.status, row.doctor, row.patient);
                if let Some(reason) = row.cancellation_reason {
                    println!("  Reason: {}", reason);
                }
            }
            Ok(())
        }
        AppointmentCommand::Schedule {
            patient,
            doctor,
            date,
            time,
        } => {
            let mut screen = SchedulingScreen::new(config.page_size);
            screen.load(api).await?;
            screen.select_patient(patient)?;
            screen.select_doctor(doctor)?;
            screen.enter_scheduled_at(&date, &time)?;

            report(screen.submit(api).await?, "Appointment scheduled")
        }
    }
}

fn report(outcome: SubmitOutcome, success: &str) -> Result<()> {
    match outcome {
        SubmitOutcome::Confirmed => {
            println!("{}", success);
            Ok(())
        }
        SubmitOutcome::Failed(message) => Err(eyre!(message)),
    }
}
