fn main() {
    uniffi::generate_scaffolding("src/nutrition.udl").expect("UDL scaffolding generation failed");
}
