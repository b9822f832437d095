//! Wingedge CLI - interactive winged-edge mesh sessions.
//!
//! Loads an OBJ file, then serves adjacency queries, transform
//! sequences, resets, and saves from a numbered menu until EOF or exit.

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use nalgebra::Matrix4;

use wingedge::WingedMesh;
use wingedge::float_types::Real;
use wingedge::io::{load_obj, save_obj};
use wingedge::mesh::transform;

#[derive(Parser)]
#[command(name = "wingedge")]
#[command(author, version, about = "Interactive winged-edge mesh inspector", long_about = None)]
struct Cli {
    /// OBJ file to load
    input: PathBuf,
}

type Input = io::Lines<io::StdinLock<'static>>;

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mesh = load_obj(&cli.input)?;
    println!(
        "Loaded {}: {} vertices, {} edges, {} faces",
        cli.input.display(),
        mesh.num_vertices(),
        mesh.num_edges(),
        mesh.num_faces()
    );
    for warning in mesh.warnings() {
        println!("warning: {warning}");
    }
    session(mesh)?;
    Ok(())
}

fn session(mut mesh: WingedMesh) -> io::Result<()> {
    let mut input = io::stdin().lock().lines();
    loop {
        print_menu();
        let Some(choice) = prompt(&mut input, "> ")? else {
            return Ok(());
        };
        match choice.trim() {
            "0" => return Ok(()),
            "1" => cmd_faces_sharing_vertex(&mesh, &mut input)?,
            "2" => cmd_edges_sharing_vertex(&mesh, &mut input)?,
            "3" => cmd_faces_sharing_edge(&mesh, &mut input)?,
            "4" => cmd_edges_of_face(&mesh, &mut input)?,
            "5" => cmd_faces_adjacent(&mesh, &mut input)?,
            "6" => cmd_transform(&mut mesh, &mut input)?,
            "7" => {
                mesh.reset();
                println!("Mesh rebuilt from its original records");
            },
            "8" => cmd_save(&mesh, &mut input)?,
            "" => {},
            other => println!("Unknown option: {other}"),
        }
    }
}

fn print_menu() {
    println!();
    println!("1) faces sharing a vertex");
    println!("2) edges sharing a vertex");
    println!("3) faces sharing an edge");
    println!("4) edges of a face");
    println!("5) faces adjacent to a face");
    println!("6) apply a transform sequence");
    println!("7) reset to original records");
    println!("8) save to OBJ file");
    println!("0) exit");
}

/// Print `text` and read one line. `None` means stdin is closed.
fn prompt(input: &mut Input, text: &str) -> io::Result<Option<String>> {
    print!("{text}");
    io::stdout().flush()?;
    match input.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}

fn read_id(input: &mut Input, text: &str) -> io::Result<Option<usize>> {
    let Some(line) = prompt(input, text)? else {
        return Ok(None);
    };
    match line.trim().parse::<usize>() {
        Ok(id) => Ok(Some(id)),
        Err(_) => {
            println!("not a positive integer: {}", line.trim());
            Ok(None)
        },
    }
}

fn cmd_faces_sharing_vertex(mesh: &WingedMesh, input: &mut Input) -> io::Result<()> {
    let Some(id) = read_id(input, "vertex id: ")? else {
        return Ok(());
    };
    match mesh.faces_sharing_vertex(id) {
        Ok(faces) => println!("faces sharing vertex {}: {:?}", id, faces),
        Err(e) => println!("{e}"),
    }
    Ok(())
}

fn cmd_edges_sharing_vertex(mesh: &WingedMesh, input: &mut Input) -> io::Result<()> {
    let Some(id) = read_id(input, "vertex id: ")? else {
        return Ok(());
    };
    match mesh.edges_sharing_vertex(id) {
        Ok(edges) => println!("edges sharing vertex {}: {:?}", id, edges),
        Err(e) => println!("{e}"),
    }
    Ok(())
}

fn cmd_faces_sharing_edge(mesh: &WingedMesh, input: &mut Input) -> io::Result<()> {
    let Some(line) = prompt(input, "vertex ids (v1 v2): ")? else {
        return Ok(());
    };
    let ids: Vec<usize> = line
        .split_whitespace()
        .filter_map(|t| t.parse().ok())
        .collect();
    if ids.len() != 2 {
        println!("need exactly two vertex ids");
        return Ok(());
    }
    match mesh.faces_sharing_edge(ids[0], ids[1]) {
        Ok(faces) => println!("faces sharing edge ({}, {}): {:?}", ids[0], ids[1], faces),
        Err(e) => println!("{e}"),
    }
    Ok(())
}

fn cmd_edges_of_face(mesh: &WingedMesh, input: &mut Input) -> io::Result<()> {
    let Some(id) = read_id(input, "face id: ")? else {
        return Ok(());
    };
    match mesh.edges_of_face(id) {
        Ok(edges) => println!("edges of face {}: {:?}", id, edges),
        Err(e) => println!("{e}"),
    }
    Ok(())
}

fn cmd_faces_adjacent(mesh: &WingedMesh, input: &mut Input) -> io::Result<()> {
    let Some(id) = read_id(input, "face id: ")? else {
        return Ok(());
    };
    match mesh.faces_adjacent_to_face(id) {
        Ok(faces) => println!("faces adjacent to face {}: {:?}", id, faces),
        Err(e) => println!("{e}"),
    }
    Ok(())
}

/// Collect transform steps line by line, compose them, and apply the
/// combined matrix. The first step entered is the first applied.
fn cmd_transform(mesh: &mut WingedMesh, input: &mut Input) -> io::Result<()> {
    println!("Transform steps, one per line; `done` composes and applies:");
    println!("  translate dx dy dz");
    println!("  scale sx sy sz");
    println!("  rotate-x deg | rotate-y deg | rotate-z deg");
    let mut steps: Vec<Matrix4<Real>> = Vec::new();
    loop {
        let Some(line) = prompt(input, "transform> ")? else {
            return Ok(());
        };
        let mut tokens = line.split_whitespace();
        let Some(op) = tokens.next() else {
            continue;
        };
        let args: Vec<Real> = tokens.filter_map(|t| t.parse().ok()).collect();
        match (op, args.as_slice()) {
            ("done", _) => break,
            ("translate", &[dx, dy, dz]) => steps.push(transform::translation(dx, dy, dz)),
            ("scale", &[sx, sy, sz]) => steps.push(transform::scaling(sx, sy, sz)),
            ("rotate-x", &[deg]) => steps.push(transform::rotation_x(deg)),
            ("rotate-y", &[deg]) => steps.push(transform::rotation_y(deg)),
            ("rotate-z", &[deg]) => steps.push(transform::rotation_z(deg)),
            _ => println!("unrecognized step: {}", line.trim()),
        }
    }
    if steps.is_empty() {
        println!("no transform steps given");
        return Ok(());
    }
    let matrix = transform::compose(&steps);
    println!("Composed matrix:\n{}", matrix);
    let skipped = mesh.apply_transform(&matrix);
    println!(
        "Transformed {} of {} vertices",
        mesh.num_vertices() - skipped.len(),
        mesh.num_vertices()
    );
    for warning in &skipped {
        println!("warning: {warning}");
    }
    Ok(())
}

fn cmd_save(mesh: &WingedMesh, input: &mut Input) -> io::Result<()> {
    let Some(line) = prompt(input, "output path: ")? else {
        return Ok(());
    };
    let path = line.trim();
    if path.is_empty() {
        println!("no path given");
        return Ok(());
    }
    match save_obj(mesh, path) {
        Ok(warnings) => {
            println!("Saved {} faces to {}", mesh.num_faces() - warnings.len(), path);
            for warning in &warnings {
                println!("warning: {warning}");
            }
        },
        Err(e) => println!("save failed: {e}"),
    }
    Ok(())
}
