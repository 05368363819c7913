fn main() {
    cynic_codegen::register_schema("dashboard")
        .from_sdl_file("schemas/dashboard.graphql")
        .expect("failed to load dashboard.graphql schema file")
        .as_default()
        .expect("failed to register dashboard schema as default");
}
