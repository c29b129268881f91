use super::RawRecord;

pub(super) const RECORDS: &[RawRecord] = &[
	RawRecord {
		id: 1,
		name: "git init",
		summary: "Inicializa un nuevo repositorio Git en el directorio actual. Este comando crea una carpeta oculta .git que contiene toda la estructura necesaria para el control de versiones. Es el primer paso para comenzar a usar Git en un proyecto nuevo.",
		description: &[
			"El comando \"git init\" es el primer paso para comenzar a usar Git en cualquier proyecto. Este comando inicializa un nuevo repositorio Git en el directorio actual.",
			"",
			"Cuando ejecutas git init, Git crea una carpeta oculta llamada \".git\" en tu directorio. Esta carpeta contiene toda la estructura y metadatos necesarios para el control de versiones: objetos, referencias, configuración, hooks, y más.",
			"",
			"¿Cuándo usar git init?",
			"- Cuando comienzas un proyecto nuevo desde cero",
			"- Cuando quieres agregar control de versiones a un proyecto existente",
			"- Cuando necesitas crear un repositorio local antes de conectarlo a un remoto",
			"",
			"Importante: Solo necesitas ejecutar este comando una vez por proyecto. Una vez inicializado, Git rastreará todos los cambios en ese directorio y sus subdirectorios.",
			"",
			"Después de git init, típicamente configurarás tu información de usuario (git config) y crearás tu primer commit.",
		],
		syntax: Some("git init [directorio]"),
		examples: &[
			"# Inicializar en el directorio actual",
			"git init",
			"",
			"# Inicializar en un directorio específico",
			"git init mi-proyecto",
			"",
			"# Inicializar con rama principal personalizada",
			"git init -b main",
		],
		nodes: &[
			("1", "Proyecto sin Git", 250.0, 0.0),
			("2", "Ejecutar: git init", 250.0, 100.0),
			("3", "Crear carpeta .git", 250.0, 200.0),
			("4", "Inicializar objetos", 100.0, 300.0),
			("5", "Crear referencias", 250.0, 300.0),
			("6", "Configurar hooks", 400.0, 300.0),
			("7", "Repositorio Listo", 250.0, 400.0),
		],
		edges: &[
			("e1-2", "1", "2", None, true),
			("e2-3", "2", "3", Some("Crear estructura"), true),
			("e3-4", "3", "4", None, false),
			("e3-5", "3", "5", None, false),
			("e3-6", "3", "6", None, false),
			("e4-7", "4", "7", None, false),
			("e5-7", "5", "7", None, false),
			("e6-7", "6", "7", None, false),
		],
	},
	RawRecord {
		id: 2,
		name: "git clone",
		summary: "Clona un repositorio remoto existente en tu máquina local. Descarga todo el historial del proyecto y crea una copia completa del repositorio. Es útil cuando quieres contribuir a un proyecto existente o trabajar en una copia de un repositorio remoto.",
		description: &[
			"El comando \"git clone\" crea una copia local de un repositorio remoto existente. Es la forma principal de obtener una copia completa de un proyecto Git que ya existe en otro lugar.",
			"",
			"A diferencia de solo descargar archivos, git clone:",
			"- Descarga TODO el historial del proyecto (todos los commits, ramas, tags)",
			"- Configura automáticamente el repositorio remoto como \"origin\"",
			"- Te deja en la rama principal del proyecto",
			"- Mantiene toda la información de control de versiones",
			"",
			"¿Cuándo usar git clone?",
			"- Cuando quieres contribuir a un proyecto open source",
			"- Cuando te unes a un equipo y necesitas trabajar en su código",
			"- Cuando quieres hacer un fork de un proyecto existente",
			"- Cuando necesitas una copia de respaldo de un repositorio",
			"",
			"URLs comunes para clonar:",
			"- HTTPS: https://github.com/usuario/repositorio.git",
			"- SSH: git@github.com:usuario/repositorio.git",
			"- Git Protocol: git://github.com/usuario/repositorio.git",
			"",
			"Después de clonar, puedes comenzar a trabajar inmediatamente con el código.",
		],
		syntax: Some("git clone <url> [directorio]"),
		examples: &[
			"# Clonar un repositorio desde GitHub",
			"git clone https://github.com/usuario/repo.git",
			"",
			"# Clonar en un directorio específico",
			"git clone https://github.com/usuario/repo.git mi-carpeta",
			"",
			"# Clonar usando SSH",
			"git clone git@github.com:usuario/repo.git",
			"",
			"# Clonar solo la rama principal (shallow clone)",
			"git clone --depth 1 https://github.com/usuario/repo.git",
		],
		nodes: &[
			("1", "Repositorio Remoto", 250.0, 0.0),
			("2", "Ejecutar: git clone", 250.0, 100.0),
			("3", "Descargar objetos", 100.0, 200.0),
			("4", "Descargar ramas", 250.0, 200.0),
			("5", "Descargar historial", 400.0, 200.0),
			("6", "Configurar origin", 250.0, 300.0),
			("7", "Checkout rama main", 250.0, 400.0),
			("8", "Repositorio Local Listo", 250.0, 500.0),
		],
		edges: &[
			("e1-2", "1", "2", None, true),
			("e2-3", "2", "3", None, true),
			("e2-4", "2", "4", None, true),
			("e2-5", "2", "5", None, true),
			("e3-6", "3", "6", None, false),
			("e4-6", "4", "6", None, false),
			("e5-6", "5", "6", None, false),
			("e6-7", "6", "7", None, false),
			("e7-8", "7", "8", None, false),
		],
	},
	RawRecord {
		id: 3,
		name: "git add",
		summary: "Agrega archivos al área de staging (preparación). Este comando marca los cambios que quieres incluir en tu próximo commit. Puedes agregar archivos específicos, directorios completos, o usar patrones para seleccionar múltiples archivos a la vez.",
		description: &[
			"El comando \"git add\" agrega cambios del directorio de trabajo al área de staging (preparación). Es un paso intermedio crucial antes de confirmar cambios.",
			"",
			"Las tres áreas de Git:",
			"1. Working Directory: donde editas archivos",
			"2. Staging Area: donde preparas cambios para commit",
			"3. Repository: donde se guardan commits permanentes",
			"",
			"git add mueve cambios del Working Directory al Staging Area.",
			"",
			"¿Por qué usar staging?",
			"- Permite commits selectivos (solo algunos cambios, no todos)",
			"- Te da oportunidad de revisar cambios antes de confirmar",
			"- Facilita commits atómicos (un cambio lógico por commit)",
			"- Puedes preparar archivos en múltiples pasos",
			"",
			"Variaciones comunes:",
			"- git add archivo.txt → agrega un archivo específico",
			"- git add *.js → agrega todos los archivos .js",
			"- git add . → agrega todos los cambios en el directorio actual",
			"- git add -A → agrega todos los cambios en todo el repositorio",
			"- git add -p → modo interactivo para agregar cambios parciales",
			"",
			"Después de git add, usas git commit para confirmar los cambios preparados.",
		],
		syntax: Some("git add <archivo|directorio|patrón>"),
		examples: &[
			"# Agregar un archivo específico",
			"git add index.html",
			"",
			"# Agregar todos los archivos en un directorio",
			"git add src/",
			"",
			"# Agregar todos los cambios",
			"git add .",
			"",
			"# Agregar archivos interactivamente",
			"git add -p",
			"",
			"# Agregar archivos modificados y eliminados (no nuevos)",
			"git add -u",
		],
		nodes: &[
			("1", "Modificar archivos", 250.0, 0.0),
			("2", "Working Directory", 250.0, 100.0),
			("3", "Ejecutar: git add", 250.0, 200.0),
			("4", "Revisar cambios", 100.0, 300.0),
			("5", "Calcular hash", 400.0, 300.0),
			("6", "Staging Area", 250.0, 400.0),
			("7", "Listo para commit", 250.0, 500.0),
		],
		edges: &[
			("e1-2", "1", "2", None, false),
			("e2-3", "2", "3", Some("git add"), true),
			("e3-4", "3", "4", None, false),
			("e3-5", "3", "5", None, false),
			("e4-6", "4", "6", None, false),
			("e5-6", "5", "6", None, false),
			("e6-7", "6", "7", None, true),
		],
	},
	RawRecord {
		id: 4,
		name: "git commit",
		summary: "Confirma los cambios del staging area y los guarda en el repositorio local. Cada commit crea una instantánea permanente de tu proyecto con un mensaje descriptivo. Los commits son la unidad básica del historial de Git y deben ser atómicos y con mensajes claros.",
		description: &[
			"El comando \"git commit\" guarda los cambios del staging area de forma permanente en el repositorio. Cada commit es una instantánea completa de tu proyecto en ese momento.",
			"",
			"Anatomía de un commit:",
			"- Hash SHA-1 único (identificador)",
			"- Autor y fecha",
			"- Mensaje descriptivo",
			"- Puntero al árbol de archivos",
			"- Puntero al commit padre (excepto el primero)",
			"",
			"Buenas prácticas para commits:",
			"1. Commits atómicos: un cambio lógico por commit",
			"2. Mensajes claros: explica QUÉ y POR QUÉ, no cómo",
			"3. Tiempo presente: \"Add feature\" no \"Added feature\"",
			"4. Primera línea breve (50 caracteres max)",
			"5. Cuerpo detallado si es necesario (después de línea en blanco)",
			"",
			"Formato de mensaje convencional:",
			"",
			"tipo(alcance): descripción breve",
			"",
			"Explicación detallada opcional de los cambios,",
			"por qué fueron necesarios, y cualquier contexto",
			"adicional que sea útil.",
			"",
			"Tipos comunes: feat, fix, docs, style, refactor, test, chore",
			"",
			"Los commits son permanentes y forman el historial del proyecto. ¡Escribe buenos mensajes!",
		],
		syntax: Some("git commit -m \"mensaje\""),
		examples: &[
			"# Commit con mensaje simple",
			"git commit -m \"feat: add user authentication\"",
			"",
			"# Commit con mensaje detallado",
			"git commit -m \"fix: resolve login bug\" -m \"Users couldn't login with special characters\"",
			"",
			"# Commit abriendo editor para mensaje largo",
			"git commit",
			"",
			"# Agregar y commit en un solo paso",
			"git commit -am \"update documentation\"",
			"",
			"# Modificar el último commit",
			"git commit --amend",
		],
		nodes: &[
			("1", "Staging Area", 250.0, 0.0),
			("2", "Ejecutar: git commit", 250.0, 100.0),
			("3", "Escribir mensaje", 100.0, 200.0),
			("4", "Crear snapshot", 400.0, 200.0),
			("5", "Generar hash SHA-1", 250.0, 300.0),
			("6", "Vincular con padre", 150.0, 400.0),
			("7", "Actualizar HEAD", 350.0, 400.0),
			("8", "Commit guardado", 250.0, 500.0),
		],
		edges: &[
			("e1-2", "1", "2", None, true),
			("e2-3", "2", "3", None, false),
			("e2-4", "2", "4", None, false),
			("e3-5", "3", "5", None, false),
			("e4-5", "4", "5", None, false),
			("e5-6", "5", "6", None, false),
			("e5-7", "5", "7", None, false),
			("e6-8", "6", "8", None, false),
			("e7-8", "7", "8", None, false),
		],
	},
	RawRecord {
		id: 5,
		name: "git push",
		summary: "Envía tus commits locales a un repositorio remoto. Este comando sincroniza tu trabajo con el servidor, permitiendo que otros desarrolladores accedan a tus cambios. Es importante hacer pull antes de push para evitar conflictos con cambios remotos.",
		description: &[
			"El comando \"git push\" envía tus commits locales a un repositorio remoto. Es la forma de compartir tu trabajo con otros desarrolladores y sincronizar cambios.",
			"",
			"¿Cómo funciona git push?",
			"Git compara los commits en tu rama local con la rama remota. Si tu rama local tiene commits que el remoto no tiene, Git los envía. Si el remoto tiene commits que tú no tienes, Git rechaza el push para evitar sobrescribir trabajo.",
			"",
			"Componentes de un push:",
			"- Remoto: dónde enviar (usualmente \"origin\")",
			"- Rama local: qué rama enviar",
			"- Rama remota: dónde guardar en el remoto",
			"",
			"Situaciones comunes:",
			"1. Push normal: tu rama está adelantada del remoto",
			"2. Push rechazado: el remoto tiene commits que no tienes (necesitas pull primero)",
			"3. Force push: sobrescribe el remoto (¡CUIDADO! puede perder trabajo)",
			"4. Push de rama nueva: crea la rama en el remoto",
			"",
			"Flujo recomendado:",
			"1. git pull (obtener últimos cambios)",
			"2. Resolver conflictos si hay",
			"3. git push (enviar tus cambios)",
			"",
			"Nunca hagas force push a ramas compartidas como main o develop.",
		],
		syntax: Some("git push [remoto] [rama]"),
		examples: &[
			"# Push a la rama actual",
			"git push",
			"",
			"# Push especificando remoto y rama",
			"git push origin main",
			"",
			"# Push y configurar tracking",
			"git push -u origin feature-branch",
			"",
			"# Push todas las ramas",
			"git push --all",
			"",
			"# Push forzado (usar con precaución)",
			"git push --force",
			"",
			"# Push de tags",
			"git push --tags",
		],
		nodes: &[
			("1", "Commits Locales", 100.0, 0.0),
			("2", "Ejecutar: git push", 250.0, 100.0),
			("3", "Verificar permisos", 250.0, 200.0),
			("4", "Comparar historiales", 250.0, 300.0),
			("5", "¿Actualizado?", 250.0, 400.0),
			("6", "Rechazado", 100.0, 500.0),
			("7", "Transferir objetos", 400.0, 500.0),
			("8", "Hacer pull", 100.0, 600.0),
			("9", "Actualizar remoto", 400.0, 600.0),
			("10", "Push exitoso", 400.0, 700.0),
		],
		edges: &[
			("e1-2", "1", "2", None, true),
			("e2-3", "2", "3", None, false),
			("e3-4", "3", "4", None, false),
			("e4-5", "4", "5", None, false),
			("e5-6", "5", "6", Some("No"), false),
			("e5-7", "5", "7", Some("Sí"), true),
			("e6-8", "6", "8", None, false),
			("e7-9", "7", "9", None, false),
			("e9-10", "9", "10", None, false),
		],
	},
	RawRecord {
		id: 6,
		name: "git pull",
		summary: "Descarga y fusiona cambios del repositorio remoto a tu rama actual. Es una combinación de git fetch (descarga) y git merge (fusiona). Mantiene tu repositorio local actualizado con los últimos cambios del equipo y es fundamental en el trabajo colaborativo.",
		description: &[
			"El comando \"git pull\" descarga cambios de un repositorio remoto y los fusiona con tu rama actual. Es esencial para mantenerse sincronizado con el trabajo del equipo.",
			"",
			"git pull = git fetch + git merge",
			"1. git fetch: descarga commits, archivos y referencias del remoto",
			"2. git merge: integra los cambios descargados en tu rama actual",
			"",
			"¿Cuándo usar git pull?",
			"- Al comenzar tu jornada de trabajo",
			"- Antes de crear una nueva rama",
			"- Antes de hacer push",
			"- Cuando alguien te avisa que hizo cambios",
			"- Periódicamente durante el día",
			"",
			"Posibles resultados:",
			"1. Fast-forward: tu rama simplemente se adelanta (no hay conflictos)",
			"2. Merge automático: Git fusiona cambios sin conflictos",
			"3. Conflictos: tú y otro desarrollador modificaron las mismas líneas",
			"",
			"Variantes útiles:",
			"- git pull --rebase: aplica tus commits encima de los cambios remotos (historial más limpio)",
			"- git pull origin main: pull específico de rama",
			"- git fetch + git merge: pull manual con más control",
			"",
			"Hacer pull frecuentemente reduce conflictos y facilita la integración.",
		],
		syntax: Some("git pull [remoto] [rama]"),
		examples: &[
			"# Pull de la rama actual",
			"git pull",
			"",
			"# Pull de rama específica",
			"git pull origin main",
			"",
			"# Pull con rebase en lugar de merge",
			"git pull --rebase",
			"",
			"# Pull de todas las ramas",
			"git pull --all",
			"",
			"# Fetch sin merge (solo descargar)",
			"git fetch",
			"git merge origin/main",
		],
		nodes: &[
			("1", "Repositorio Remoto", 400.0, 0.0),
			("2", "Ejecutar: git pull", 250.0, 100.0),
			("3", "Git Fetch", 250.0, 200.0),
			("4", "Descargar cambios", 250.0, 300.0),
			("5", "Git Merge", 250.0, 400.0),
			("6", "¿Conflictos?", 250.0, 500.0),
			("7", "Resolver conflictos", 100.0, 600.0),
			("8", "Merge exitoso", 400.0, 600.0),
			("9", "Rama actualizada", 250.0, 700.0),
		],
		edges: &[
			("e1-2", "1", "2", None, true),
			("e2-3", "2", "3", Some("Fase 1"), false),
			("e3-4", "3", "4", None, true),
			("e4-5", "4", "5", Some("Fase 2"), false),
			("e5-6", "5", "6", None, false),
			("e6-7", "6", "7", Some("Sí"), false),
			("e6-8", "6", "8", Some("No"), true),
			("e7-9", "7", "9", None, false),
			("e8-9", "8", "9", None, false),
		],
	},
];
