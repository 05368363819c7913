fn main() {
    cynic_codegen::register_schema("dashboard")
        .from_sdl_file("../../schemas/dashboard.graphql")
        .expect("Failed to find dashboard GraphQL schema")
        .as_default()
        .expect("Failed to set dashboard schema as default");
}
