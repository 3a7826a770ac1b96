// std
use std::error::Error;
use std::fs::File;
use std::path::PathBuf;
// others
use pbr::ProgressBar;
use structopt::StructOpt;
// crate
use glint::core::camera::PinholeCamera;
use glint::core::film::Film;
use glint::core::pbrt::{radians, Float};
use glint::core::renderer::{RenderSettings, Renderer};
use glint::core::scene::{Scene, SceneObject};
use glint::core::spectrum::Spectrum;
use glint::core::transform::Quaternion;
use glint::lights::DiffuseAreaLight;
use glint::materials::{
    create_ashikhmin_shirley, create_coated_plastic, create_matte, create_metal, create_plastic,
};
use glint::shapes::{Cube, Rect, Shape, Sphere};

#[derive(Debug, StructOpt)]
#[structopt(name = "glint", about = "Offline Monte-Carlo path tracer.")]
struct Opt {
    #[structopt(long, default_value = "480")]
    width: usize,
    #[structopt(long, default_value = "360")]
    height: usize,
    /// Samples per pixel.
    #[structopt(long, default_value = "64")]
    spp: u32,
    /// Vertical field of view in degrees.
    #[structopt(long, default_value = "50")]
    fov: Float,
    #[structopt(short, long, parse(from_os_str), default_value = "render.png")]
    output: PathBuf,
    /// JSON render settings; overrides the size/spp/fov flags.
    #[structopt(long, parse(from_os_str))]
    settings: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let opt = Opt::from_args();
    let settings: RenderSettings = match opt.settings {
        Some(ref path) => serde_json::from_reader(File::open(path)?)?,
        None => RenderSettings {
            width: opt.width,
            height: opt.height,
            samples_per_pixel: opt.spp,
            vertical_fov: opt.fov,
        },
    };

    let aspect = settings.width as Float / settings.height as Float;
    let scene = build_box_scene(aspect);
    let camera = PinholeCamera::new(settings.vertical_fov, settings.width, settings.height);
    let film = Film::new(settings.width, settings.height);
    let mut renderer = Renderer::new(scene, camera, film);

    let mut progress = ProgressBar::new(u64::from(settings.samples_per_pixel));
    progress.message("pass ");
    for _ in 0..settings.samples_per_pixel {
        renderer.render_pass();
        progress.inc();
    }
    progress.finish_print("render complete");

    let (width, height) = (settings.width, settings.height);
    let mut bgr = vec![0u8; width * height * 3];
    renderer.film.flush(&mut bgr, width * 3);

    // film rows run bottom-up; image rows run top-down
    let mut rgb = vec![0u8; width * height * 3];
    for row in 0..height {
        let src_row = height - 1 - row;
        for col in 0..width {
            let src = (src_row * width + col) * 3;
            let dst = (row * width + col) * 3;
            rgb[dst] = bgr[src + 2];
            rgb[dst + 1] = bgr[src + 1];
            rgb[dst + 2] = bgr[src];
        }
    }
    image::save_buffer(
        &opt.output,
        &rgb,
        width as u32,
        height as u32,
        image::ColorType::Rgb8,
    )?;
    println!("wrote {}", opt.output.display());
    Ok(())
}

/// Closed box with a ceiling light and a few test objects, sized like
/// the classic box fixture: walls at +-60 vertically, the far wall at
/// 150, the camera looking down +z.
fn build_box_scene(aspect: Float) -> Scene {
    let scene_size: Float = 60.0;
    let scene_near: Float = 1.0;
    let scene_far = scene_size * 2.5;
    let scene_bottom = -scene_size;
    let scene_top = scene_size;
    let scene_left = -scene_size * aspect;
    let scene_right = scene_size * aspect;

    let center_x = (scene_left + scene_right) * 0.5;
    let center_y = (scene_bottom + scene_top) * 0.5;
    let center_z = (scene_near + scene_far) * 0.5;
    let extend_x = (scene_right - scene_left) * 0.5;
    let extend_y = (scene_top - scene_bottom) * 0.5;
    let extend_z = (scene_far - scene_near) * 0.5;

    let small_object_size: Float = 8.0;
    let big_object_size = small_object_size * 1.75;

    let mut scene = Scene::new();

    let mut matte_sphere = SceneObject::new(Shape::Sphere(Sphere::new(small_object_size)));
    matte_sphere.set_translate(center_x - 20.0, scene_bottom + small_object_size, center_z - 5.0);
    matte_sphere.material = Some(create_matte(Spectrum::new(0.9)));
    scene.add_object(matte_sphere);

    let mut metal_sphere = SceneObject::new(Shape::Sphere(Sphere::new(16.0)));
    metal_sphere.set_translate(center_x, center_y, center_z + 10.0);
    metal_sphere.material = Some(create_metal(0.05, Spectrum::new(0.9)));
    scene.add_object(metal_sphere);

    let mut plastic_sphere = SceneObject::new(Shape::Sphere(Sphere::new(15.0)));
    plastic_sphere.set_translate(center_x + 40.0, center_y, center_z + 10.0);
    plastic_sphere.material = Some(create_plastic(
        Spectrum::rgb(0.2, 0.4, 0.75),
        0.35,
        Spectrum::new(0.04),
    ));
    scene.add_object(plastic_sphere);

    let mut substrate_sphere = SceneObject::new(Shape::Sphere(Sphere::new(20.0)));
    substrate_sphere.set_translate(scene_left + 30.0, scene_bottom + 20.0, scene_far - 30.0);
    substrate_sphere.material = Some(create_ashikhmin_shirley(
        0.3,
        Spectrum::rgb(0.7, 0.5, 0.2),
        Spectrum::new(0.05),
    ));
    scene.add_object(substrate_sphere);

    let mut tall_cube = SceneObject::new(Shape::Cube(Cube::new(
        small_object_size,
        big_object_size,
        small_object_size,
    )));
    tall_cube.set_translate(
        center_x + 20.0 + big_object_size,
        scene_bottom + big_object_size,
        center_z + 30.0,
    );
    tall_cube.set_rotation(Quaternion::rotate_y(radians(-30.0)));
    tall_cube.material = Some(create_matte(Spectrum::new(0.75)));
    scene.add_object(tall_cube);

    let mut small_cube = SceneObject::new(Shape::Cube(Cube::new(
        small_object_size,
        small_object_size,
        small_object_size,
    )));
    small_cube.set_translate(
        center_x + 15.0 + small_object_size,
        scene_bottom + small_object_size,
        center_z + 5.0,
    );
    small_cube.set_rotation(Quaternion::rotate_y(radians(60.0)));
    small_cube.material = Some(create_coated_plastic(
        Spectrum::new(0.75),
        0.3,
        Spectrum::new(0.04),
        0.5,
    ));
    scene.add_object(small_cube);

    let red = Spectrum::rgb(0.75, 0.2, 0.2);
    let green = Spectrum::rgb(0.2, 0.75, 0.2);
    let blue = Spectrum::rgb(0.2, 0.2, 0.75);
    let gray = Spectrum::new(0.75);
    let dark_gray = Spectrum::new(0.6);

    let mut wall_left = SceneObject::new(Shape::Rect(Rect::new(extend_z, extend_y)));
    wall_left.set_translate(scene_left, center_y, center_z);
    wall_left.material = Some(create_matte(red));
    scene.add_object(wall_left);

    let mut wall_right = SceneObject::new(Shape::Rect(Rect::new(extend_z, extend_y)));
    wall_right.set_translate(scene_right, center_y, center_z);
    wall_right.set_rotation(Quaternion::rotate_y(radians(180.0)));
    wall_right.material = Some(create_matte(blue));
    scene.add_object(wall_right);

    let mut wall_top = SceneObject::new(Shape::Rect(Rect::new(extend_z, extend_x)));
    wall_top.set_translate(center_x, scene_top, center_z);
    wall_top.set_rotation(Quaternion::rotate_z(radians(-90.0)));
    wall_top.material = Some(create_matte(gray));
    scene.add_object(wall_top);

    let mut wall_bottom = SceneObject::new(Shape::Rect(Rect::new(extend_z, extend_x)));
    wall_bottom.set_translate(center_x, scene_bottom, center_z);
    wall_bottom.set_rotation(Quaternion::rotate_z(radians(90.0)));
    wall_bottom.material = Some(create_matte(green));
    scene.add_object(wall_bottom);

    let mut wall_far = SceneObject::new(Shape::Rect(Rect::new(extend_x, extend_y)));
    wall_far.set_translate(center_x, center_y, scene_far);
    wall_far.set_rotation(Quaternion::rotate_y(radians(90.0)));
    wall_far.material = Some(create_matte(dark_gray));
    scene.add_object(wall_far);

    let mut ceiling_light = SceneObject::new(Shape::Rect(Rect::new(25.0, 25.0)));
    ceiling_light.set_translate(center_x, scene_top - 0.01, center_z + 10.0);
    ceiling_light.set_rotation(Quaternion::rotate_z(radians(-90.0)));
    ceiling_light.material = Some(create_matte(Spectrum::default()));
    ceiling_light.light = Some(DiffuseAreaLight::white(1.0));
    scene.add_object(ceiling_light);

    scene.build();
    scene
}
